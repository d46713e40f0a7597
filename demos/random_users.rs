//! Fetches a few random users in every export format.
//!
//! Run with: cargo run --example random_users
//!
//! Needs network access to randomuser.me.

use std::fs::File;
use std::time::Duration;

use floem_toolbox::users::{ExportFormat, RandomUserClient, UserDetail, UserQuery};
use simplelog::{Config, LevelFilter, WriteLogger};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let log_file = File::create("random_users.log")?;
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)?;

    let client = RandomUserClient::new()?.timeout(Duration::from_secs(10));

    for format in ExportFormat::ALL {
        let query = UserQuery {
            count: 3,
            detail: UserDetail::Expanded,
            format,
            ..Default::default()
        };
        println!("== {} ==", format.param());

        let batch = client.fetch(&query).await?;
        for user in &batch.users {
            println!("{} <{}>", user.display_name(), user.email.as_deref().unwrap_or("-"));
        }
        match batch.user_raw(0) {
            Some(first) => println!("first user:\n{first}\n"),
            None => println!("{}\n", batch.raw),
        }
    }

    Ok(())
}
