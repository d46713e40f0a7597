//! Client for the randomuser.me test-data service.
//!
//! Builds queries, fetches one batch, and exposes both typed users and the
//! raw body for export.

mod batch;
mod client;
mod csv_rows;
mod model;
mod query;
mod xml_rows;

pub use batch::UserBatch;
pub use client::RandomUserClient;
pub use model::{
    ApiInfo, ApiResponse, Coordinates, DateAge, Location, Login, Picture, Scalar, Street,
    Timezone, User, UserId, UserName,
};
pub use query::{
    ExportFormat, Gender, MAX_USERS, NATIONALITIES, RANDOM_USER_ENDPOINT, USER_COUNTS,
    UserDetail, UserQuery, is_supported_nationality,
};
