// Heartline - emotion-aware supportive replies with a crisis override
// Library exports

pub mod config;
pub mod crisis;
pub mod emotion;
pub mod errors;
pub mod pipeline;
pub mod providers; // Generative text service
pub mod responder;
pub mod server; // HTTP adapter
