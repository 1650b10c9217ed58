pub mod constants;
mod cors;
mod header_builder;
mod headers;
mod headers_negotiator;
#[cfg(feature = "http")]
mod http_bridge;
mod message;
mod method_negotiator;
mod options;
mod origin;
mod origin_negotiator;
mod settings;
mod util;

pub use cors::CorsMiddleware;
pub use headers::HeaderMap;
pub use headers_negotiator::{HeadersNegotiator, NegotiateHeaders};
pub use message::{DefaultResponseFactory, Handler, Request, Response, ResponseFactory};
pub use method_negotiator::{MethodNegotiator, NegotiateMethod};
pub use options::CorsOptions;
pub use origin::{OriginMatcher, OriginPredicateFn, PatternError};
pub use origin_negotiator::{NegotiateOrigin, OriginNegotiator};
pub use settings::{CompiledSettings, CorsSettings, OriginSetting, ValidationError};
pub use util::{equals_ignore_case, normalize_lower, normalize_upper};
