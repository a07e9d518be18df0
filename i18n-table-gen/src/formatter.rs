use proc_macro2::TokenStream;
use tracing::warn;

/// Pretty-print a generated module.
///
/// Falls back to the raw token text when the tokens do not form a valid
/// source file: ugly output still compiles where it can, and a formatting
/// problem never blocks generation.
pub fn format_tokens(tokens: TokenStream) -> String {
    match syn::parse2::<syn::File>(tokens.clone()) {
        Ok(file) => prettyplease::unparse(&file),
        Err(e) => {
            warn!("failed to format generated code, writing it unformatted: {}", e);
            let mut raw = tokens.to_string();
            raw.push('\n');
            raw
        }
    }
}

/// Header plus formatted body: the full text of the generated file.
pub fn render(header: &str, tokens: TokenStream) -> String {
    let mut source = String::from(header);
    source.push('\n');
    source.push_str(&format_tokens(tokens));
    source
}
