pub mod db;
mod error;
pub mod item {
    pub mod entity;
    pub mod repository;
}
pub mod wishlist {
    pub mod entity;
    pub mod repository;
}
