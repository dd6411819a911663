pub mod jwt;
pub mod session;

pub use jwt::{Claims, JwtService};
pub use session::{login, signup, CredentialError};
