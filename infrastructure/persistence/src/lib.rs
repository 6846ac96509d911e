pub mod db;
pub mod memory;
pub mod product {
    pub mod entity;
    pub mod repository;
}
pub mod price_override {
    pub mod entity;
    pub mod repository;
}
pub mod gift_card {
    pub mod entity;
    pub mod repository;
}
