pub mod models {
    pub mod delete;
    pub mod dispatch;
    pub mod result;
}
pub mod routes {
    pub mod delete_backup;
}
pub mod utils {
    pub mod logging;
}
pub mod app;
pub mod config;
pub mod error;
pub mod github;
