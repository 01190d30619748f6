pub mod client;
pub mod method;
pub mod request;
pub mod response;

pub use client::ProbeClient;
pub use method::HttpMethod;
pub use request::ProbeRequest;
pub use response::ProbeResponse;
