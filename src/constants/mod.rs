pub mod route_constants;
