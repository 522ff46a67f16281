use proc_macro::TokenStream;
use quote::quote;
use syn::{
    Data, DeriveInput, Error, Field, GenericParam, Index, Member, Type, parse_macro_input,
    parse_quote,
};

/// Derive structural equality and hashing from a struct's declared fields.
///
/// The declared fields, in declaration order, are the considered members of
/// the value object. A field tagged `#[value_object(ignore)]` takes part in
/// neither equality nor hashing. Emits `valobj::ValueObject` together with
/// matching `PartialEq`, `Eq` and `Hash` impls, so the deriving type must
/// not derive or implement those itself.
#[proc_macro_derive(ValueObject, attributes(value_object))]
pub fn derive_value_object(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    match expand(&input) {
        Ok(tokens) => tokens,
        Err(err) => err.to_compile_error().into(),
    }
}

fn expand(input: &DeriveInput) -> syn::Result<TokenStream> {
    let fields = match &input.data {
        Data::Struct(data) => &data.fields,
        Data::Enum(_) | Data::Union(_) => {
            return Err(Error::new_spanned(
                &input.ident,
                "`ValueObject` can only be derived for structs",
            ));
        }
    };

    // Considered members: every declared field minus the ignored ones, in
    // declaration order. The order is part of the hash contract.
    let mut considered: Vec<(Member, &Type)> = Vec::new();
    for (index, field) in fields.iter().enumerate() {
        if is_ignored(field)? {
            continue;
        }
        let member = match &field.ident {
            Some(ident) => Member::Named(ident.clone()),
            None => Member::Unnamed(Index::from(index)),
        };
        considered.push((member, &field.ty));
    }

    let eq_body = match considered.as_slice() {
        [] => quote! { true },
        [(first, _), rest @ ..] => {
            let mut body = quote! { self.#first == other.#first };
            for (member, _) in rest {
                body = quote! { #body && self.#member == other.#member };
            }
            body
        }
    };

    let hash_steps = considered
        .iter()
        .map(|(member, ty)| {
            if is_option(ty) {
                // Absent members contribute 0, not the hash of the `None`
                // discriminant.
                quote! {
                    hash = ::valobj::hash::fold_member(
                        hash,
                        ::valobj::hash::optional_member_hash(self.#member.as_ref()),
                    );
                }
            } else {
                quote! {
                    hash = ::valobj::hash::fold_member(
                        hash,
                        ::valobj::hash::member_hash(&self.#member),
                    );
                }
            }
        })
        .collect::<Vec<_>>();

    let hash_body = if hash_steps.is_empty() {
        quote! { ::valobj::hash::HASH_SEED }
    } else {
        quote! {
            let mut hash = ::valobj::hash::HASH_SEED;
            #(#hash_steps)*
            hash
        }
    };

    let other_param = if considered.is_empty() {
        quote! { _other }
    } else {
        quote! { other }
    };

    let name = &input.ident;
    let mut generics = input.generics.clone();
    for param in generics.params.iter_mut() {
        if let GenericParam::Type(type_param) = param {
            type_param.bounds.push(parse_quote!(::core::cmp::PartialEq));
            type_param.bounds.push(parse_quote!(::core::hash::Hash));
        }
    }
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    let expanded = quote! {
        #[automatically_derived]
        impl #impl_generics ::valobj::object::ValueObject for #name #ty_generics #where_clause {
            fn structural_eq(&self, #other_param: &Self) -> bool {
                #eq_body
            }

            fn structural_hash(&self) -> u64 {
                #hash_body
            }
        }

        #[automatically_derived]
        impl #impl_generics ::core::cmp::PartialEq for #name #ty_generics #where_clause {
            fn eq(&self, other: &Self) -> bool {
                ::valobj::object::ValueObject::structural_eq(self, other)
            }
        }

        #[automatically_derived]
        impl #impl_generics ::core::cmp::Eq for #name #ty_generics #where_clause {}

        #[automatically_derived]
        impl #impl_generics ::core::hash::Hash for #name #ty_generics #where_clause {
            fn hash<__H: ::core::hash::Hasher>(&self, state: &mut __H) {
                state.write_u64(::valobj::object::ValueObject::structural_hash(self));
            }
        }
    };

    Ok(TokenStream::from(expanded))
}

fn is_ignored(field: &Field) -> syn::Result<bool> {
    let mut ignored = false;
    for attr in &field.attrs {
        if !attr.path().is_ident("value_object") {
            continue;
        }
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("ignore") {
                ignored = true;
                Ok(())
            } else {
                Err(meta.error("unknown `value_object` attribute, expected `ignore`"))
            }
        })?;
    }
    Ok(ignored)
}

// Syntactic `Option` detection, last path segment only. A field whose type
// renames `Option` is hashed through the option's own `Hash` impl instead,
// which still keeps hashes consistent with equality.
fn is_option(ty: &Type) -> bool {
    match ty {
        Type::Path(path) if path.qself.is_none() => path
            .path
            .segments
            .last()
            .is_some_and(|segment| segment.ident == "Option"),
        _ => false,
    }
}
