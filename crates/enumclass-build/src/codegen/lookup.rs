use super::{attributes, ident, path, visibility};
use enumclass_schema::prelude::*;
use proc_macro2::Literal;

///
/// LookupGen
///
/// Struct definition, registry and conversions for one target.
///

struct LookupGen<'a> {
    model: &'a GenerationModel,
    target: syn::Ident,
    enumeration: syn::Path,
    variants: Vec<syn::Path>,
}

// generate
pub fn generate(model: &GenerationModel) -> Result<TokenStream, SchemaError> {
    let lookup = LookupGen {
        model,
        target: ident(&model.target_type_name)?,
        enumeration: path(&model.enumerate_type_full_name)?,
        variants: model
            .members
            .iter()
            .map(|member| path(&member.qualified_ref))
            .collect::<Result<_, _>>()?,
    };

    let mut tokens = lookup.definition()?;
    tokens.extend(lookup.inherent()?);
    tokens.extend(lookup.conversions());
    if model.target_kind.emits_equality() {
        tokens.extend(lookup.equality());
    }
    if model.enumerate_underlying_numeric_type == Repr::I32 {
        tokens.extend(lookup.discriminant_bounds());
    }

    Ok(tokens)
}

impl LookupGen<'_> {
    fn definition(&self) -> Result<TokenStream, SchemaError> {
        let Self {
            model,
            target,
            enumeration,
            ..
        } = self;
        let attrs = attributes(&model.target_attributes)?;
        let vis = visibility(&model.target_visibility)?;
        let repr = model.enumerate_underlying_numeric_type;
        let description = model
            .with_description
            .then(|| quote!(description: &'static str,));

        Ok(quote! {
            #(#attrs)*
            #vis struct #target {
                name: &'static str,
                value: #enumeration,
                repr: #repr,
                is_empty: bool,
                #description
            }
        })
    }

    fn inherent(&self) -> Result<TokenStream, SchemaError> {
        let Self {
            model,
            target,
            enumeration,
            variants,
        } = self;
        let repr = model.enumerate_underlying_numeric_type;
        let count = Literal::usize_unsuffixed(model.members.len());

        // numeric value that marks the empty instance
        let empty_repr = match model.default_variant() {
            Some(member) => {
                let variant = path(&member.qualified_ref)?;
                quote!(#variant as #repr)
            }
            None => quote!(0),
        };

        let (desc_param, desc_field, desc_accessor) = if model.with_description {
            (
                quote!(, description: &'static str),
                quote!(, description),
                quote! {
                    #[must_use]
                    pub const fn description(&self) -> &'static str {
                        self.description
                    }
                },
            )
        } else {
            (quote!(), quote!(), quote!())
        };

        let entries = model.members.iter().zip(variants).map(|(member, variant)| {
            let name = &member.name;
            if model.with_description {
                let description = &member.description;
                quote!(#target::new(#variant, #variant as #repr, #name, #description))
            } else {
                quote!(#target::new(#variant, #variant as #repr, #name))
            }
        });

        let arms = variants.iter().enumerate().map(|(index, variant)| {
            let index = Literal::usize_unsuffixed(index);
            quote!(#variant => &Self::items()[#index],)
        });

        Ok(quote! {
            #[allow(dead_code)]
            impl #target {
                const fn new(value: #enumeration, repr: #repr, name: &'static str #desc_param) -> Self {
                    Self {
                        name,
                        value,
                        repr,
                        is_empty: repr == #empty_repr
                        #desc_field
                    }
                }

                fn items() -> &'static [Self] {
                    static ITEMS: [#target; #count] = [#(#entries),*];
                    &ITEMS
                }

                fn registry() -> &'static ::std::collections::HashMap<&'static str, &'static #target> {
                    static REGISTRY: ::std::sync::LazyLock<
                        ::std::collections::HashMap<&'static str, &'static #target>,
                    > = ::std::sync::LazyLock::new(|| {
                        #target::items().iter().map(|item| (item.name, item)).collect()
                    });
                    &REGISTRY
                }

                /// The first declared member, returned for every failed lookup.
                #[must_use]
                pub fn empty() -> &'static Self {
                    &Self::items()[0]
                }

                /// Every member in declaration order.
                #[must_use]
                pub fn all() -> &'static [Self] {
                    Self::items()
                }

                #[must_use]
                pub fn by_name(name: &str) -> &'static Self {
                    Self::registry()
                        .get(name)
                        .copied()
                        .unwrap_or_else(Self::empty)
                }

                /// Resolve each name, dropping those that resolve to an empty instance.
                pub fn by_names<'a, I>(names: I) -> ::std::vec::Vec<&'static Self>
                where
                    I: ::core::iter::IntoIterator<Item = &'a str>,
                {
                    names
                        .into_iter()
                        .map(Self::by_name)
                        .filter(|item| !item.is_empty())
                        .collect()
                }

                #[must_use]
                #[allow(unreachable_patterns)]
                pub fn from_value(value: #enumeration) -> &'static Self {
                    match value {
                        #(#arms)*
                        _ => Self::empty(),
                    }
                }

                #[must_use]
                pub fn from_repr(repr: #repr) -> &'static Self {
                    Self::items()
                        .iter()
                        .find(|item| item.repr == repr)
                        .unwrap_or_else(Self::empty)
                }

                #[must_use]
                pub const fn name(&self) -> &'static str {
                    self.name
                }

                #[must_use]
                pub const fn value(&self) -> &#enumeration {
                    &self.value
                }

                #[must_use]
                pub const fn repr(&self) -> #repr {
                    self.repr
                }

                #[must_use]
                pub const fn is_empty(&self) -> bool {
                    self.is_empty
                }

                #desc_accessor
            }
        })
    }

    fn conversions(&self) -> TokenStream {
        let Self {
            model,
            target,
            enumeration,
            ..
        } = self;
        let repr = model.enumerate_underlying_numeric_type;

        quote! {
            impl ::core::fmt::Display for #target {
                fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                    f.write_str(self.name)
                }
            }

            impl ::core::convert::AsRef<str> for #target {
                fn as_ref(&self) -> &str {
                    self.name
                }
            }

            impl ::core::convert::From<&str> for &'static #target {
                fn from(name: &str) -> Self {
                    #target::by_name(name)
                }
            }

            impl ::core::convert::From<&#target> for &'static str {
                fn from(item: &#target) -> Self {
                    item.name
                }
            }

            impl ::core::convert::From<#enumeration> for &'static #target {
                fn from(value: #enumeration) -> Self {
                    #target::from_value(value)
                }
            }

            impl<'a> ::core::convert::From<&'a #target> for &'a #enumeration {
                fn from(item: &'a #target) -> Self {
                    &item.value
                }
            }

            impl ::core::convert::From<&#target> for #repr {
                fn from(item: &#target) -> Self {
                    item.repr
                }
            }

            impl ::core::convert::From<#repr> for &'static #target {
                fn from(repr: #repr) -> Self {
                    #target::from_repr(repr)
                }
            }
        }
    }

    // enums without `#[repr]` store isize discriminants; anything past the
    // i32 range would alias another member in `from_repr`
    fn discriminant_bounds(&self) -> TokenStream {
        let variants = &self.variants;
        let message = format!(
            "`{}` has a discriminant outside the i32 range",
            self.model.enumerate_type_full_name
        );

        quote! {
            const _: () = {
                #(
                    ::core::assert!(#variants as isize == #variants as i32 as isize, #message);
                )*
            };
        }
    }

    // identity follows the numeric value, never the name
    fn equality(&self) -> TokenStream {
        let target = &self.target;

        quote! {
            #[automatically_derived]
            impl ::core::cmp::PartialEq for #target {
                fn eq(&self, other: &Self) -> bool {
                    self.repr == other.repr
                }
            }

            #[automatically_derived]
            impl ::core::cmp::Eq for #target {}

            #[automatically_derived]
            impl ::core::hash::Hash for #target {
                fn hash<H: ::core::hash::Hasher>(&self, state: &mut H) {
                    ::core::hash::Hash::hash(&self.repr, state);
                }
            }
        }
    }
}

///
/// TESTS
///
