//! Fixed system prompts conditioning the model per audience

use crate::Audience;

const UPWARD: &str = "You are a professional assistant for reporting to a superior. \
    Convert the user's text into a polite, formal, and clear report format. \
    Start with the conclusion first. Please write in Korean.";

const LATERAL: &str = "You are a helpful colleague. Convert the user's text into a \
    friendly, mutually respectful tone for collaboration. Clearly state the request \
    and deadline. Please write in Korean.";

const EXTERNAL: &str = "You are a customer service expert. Convert the user's text \
    using the highest level of honorifics, emphasizing professionalism and a \
    service-minded attitude. The result should be suitable for official \
    announcements, apologies, or guidance. Please write in Korean.";

/// System prompt for the given audience
///
/// Total over the enum; an unrecognized audience string never reaches this
/// point because it fails to parse.
pub const fn system_prompt(audience: Audience) -> &'static str {
    match audience {
        Audience::Upward => UPWARD,
        Audience::Lateral => LATERAL,
        Audience::External => EXTERNAL,
    }
}
