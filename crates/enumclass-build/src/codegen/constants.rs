use super::ident;
use enumclass_schema::prelude::*;

// generate
// one string constant per member, in declaration order
pub fn generate(model: &GenerationModel) -> Result<TokenStream, SchemaError> {
    let target = ident(&model.target_type_name)?;
    let mut consts = quote!();

    for member in &model.members {
        let constant = ident(&member.constant)?;
        let doc = format!(" {}", member.description);
        let name = &member.name;

        consts.extend(quote! {
            #[doc = #doc]
            pub const #constant: &str = #name;
        });
    }

    Ok(quote! {
        #[allow(dead_code)]
        impl #target {
            #consts
        }
    })
}

///
/// TESTS
///
