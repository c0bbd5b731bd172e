mod core;

pub use self::core::{
    Candidate, Content, GeminiGateway, GenerateContentRequest, GenerateContentResponse, Part,
};
