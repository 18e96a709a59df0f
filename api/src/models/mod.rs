pub mod college;
pub mod post;
pub mod user;

pub use college::{ResidentialCollege, UnknownCollege};
pub use post::Post;
pub use user::User;
