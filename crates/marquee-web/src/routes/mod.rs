mod forms;
mod health;
mod link;
mod movie;
mod person;
mod roles;
mod search;

pub use health::health_routes;
pub use link::link_routes;
pub use movie::movie_routes;
pub use person::person_routes;
pub use roles::role_routes;
pub use search::search_routes;
