use proc_macro::TokenStream;
use proc_macro2::Ident;
use quote::quote;
use syn::{
    parse_macro_input, Data, DataStruct, DeriveInput, Fields, Lit, Meta, MetaNameValue,
};


// collects `(schema name, field ident)` pairs, schema name defaults to the ident
// unless overridden with `#[field_name = "..."]`
fn named_fields(input: &DeriveInput) -> Result<Vec<(String, Ident)>, syn::Error> {
    let fields = match &input.data {
        Data::Struct(DataStruct { fields: Fields::Named(named), .. }) => &named.named,
        _ => return Err(
            syn::Error::new_spanned(
                &input.ident,
                "neuron field derives only support structs with named fields"
            )
        ),
    };

    let mut output = Vec::new();

    for field in fields.iter() {
        let ident = match &field.ident {
            Some(ident) => ident.clone(),
            None => continue,
        };

        let mut name = ident.to_string();
        for attr in field.attrs.iter().filter(|attr| attr.path.is_ident("field_name")) {
            match attr.parse_meta()? {
                Meta::NameValue(MetaNameValue { lit: Lit::Str(value), .. }) => name = value.value(),
                other => return Err(
                    syn::Error::new_spanned(other, "expected `#[field_name = \"...\"]`")
                ),
            }
        }

        output.push((name, ident));
    }

    Ok(output)
}

/// Derive macro to implement `NamedFields`, giving name based access to every
/// `f64` field of a model state or parameter struct, field names can be
/// overridden with `#[field_name = "..."]`
#[proc_macro_derive(NamedFields, attributes(field_name))]
pub fn derive_named_fields(input: TokenStream) -> TokenStream {
    // Parse the input tokens into a syntax tree
    let input = parse_macro_input!(input as DeriveInput);

    let fields = match named_fields(&input) {
        Ok(fields) => fields,
        Err(e) => return e.to_compile_error().into(),
    };

    let name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let names: Vec<&String> = fields.iter().map(|(name, _)| name).collect();
    let idents: Vec<&Ident> = fields.iter().map(|(_, ident)| ident).collect();

    let expanded = quote! {
        impl #impl_generics spiking_neuron_dynamics::neuron::fields::NamedFields for #name #ty_generics #where_clause {
            fn field_names() -> &'static [&'static str] {
                &[#(#names),*]
            }

            fn get_field(&self, name: &str) -> Option<f64> {
                match name {
                    #(#names => Some(self.#idents),)*
                    _ => None,
                }
            }

            fn get_field_mut(&mut self, name: &str) -> Option<&mut f64> {
                match name {
                    #(#names => Some(&mut self.#idents),)*
                    _ => None,
                }
            }
        }
    };

    TokenStream::from(expanded)
}

/// Derive macro to implement `StateVector` so a state struct can be combined
/// elementwise by an integrator, `is_finite` checks fields directly without
/// collecting them
#[proc_macro_derive(StateVector)]
pub fn derive_state_vector(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    let fields = match named_fields(&input) {
        Ok(fields) => fields,
        Err(e) => return e.to_compile_error().into(),
    };

    let name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let idents: Vec<&Ident> = fields.iter().map(|(_, ident)| ident).collect();

    let expanded = quote! {
        impl #impl_generics spiking_neuron_dynamics::neuron::fields::StateVector for #name #ty_generics #where_clause {
            fn zip_with<F: Fn(f64, f64) -> f64>(&self, other: &Self, f: F) -> Self {
                #name {
                    #(#idents: f(self.#idents, other.#idents),)*
                }
            }

            fn values(&self) -> Vec<f64> {
                vec![#(self.#idents),*]
            }

            fn is_finite(&self) -> bool {
                true #(&& self.#idents.is_finite())*
            }
        }
    };

    TokenStream::from(expanded)
}
