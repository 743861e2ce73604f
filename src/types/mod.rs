pub mod answers;
pub mod dimension;
pub mod result;
pub mod routes;
