//! Hero collection CRUD demo
//!
//! Connects to a local MongoDB and walks the `heroes` collection through a
//! fixed create/read/update/delete sequence, logging each step. Filters and
//! values are hardcoded; any failure is logged once and ends the process
//! with a non-zero exit code.

use bson::doc;
use civilact_mongodb::{heroes, Connection, Hero, Result};
use std::process;
use tracing::{error, info, Level};
use tracing_subscriber::FmtSubscriber;

const DATABASE_URI: &str = "mongodb://localhost:27017";
const DATABASE_NAME: &str = "civilact";

#[tokio::main]
async fn main() {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .finish();
    if let Err(err) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("{}", err);
        process::exit(1);
    }

    if let Err(err) = run().await {
        error!("{}", err);
        process::exit(1);
    }
}

async fn run() -> Result<()> {
    let conn = Connection::new(DATABASE_URI, DATABASE_NAME).await?;
    conn.ping().await?;
    info!("Connected!");

    let all = heroes::find(&conn, doc! {}).await?;
    for hero in &all {
        info!("{} {} {}", hero.name, hero.alias, hero.signed);
    }

    let signed = heroes::find(&conn, doc! { "signed": true }).await?;
    for hero in &signed {
        info!("{} {} {}", hero.name, hero.alias, hero.signed);
    }

    let hero = heroes::find_one(&conn, doc! { "name": "Vision" }).await?;
    info!("{} {} {}", hero.name, hero.alias, hero.signed);

    let strange = Hero {
        name: "Stephen Strange".to_string(),
        alias: "Doctor Strange".to_string(),
        signed: true,
    };
    let inserted_id = heroes::insert_one(&conn, &strange).await?;
    info!("{}", inserted_id);

    let hero = heroes::find_one(&conn, doc! { "alias": "Doctor Strange" }).await?;
    info!("{} {} {}", hero.name, hero.alias, hero.signed);

    let removed = heroes::delete_one(&conn, doc! { "alias": "Doctor Strange" }).await?;
    info!("Heroes removed count: {}", removed);

    let hero = heroes::find_one(&conn, doc! { "alias": "Doctor Strange" }).await?;
    info!("Is hero empty? {}", hero == Hero::default());

    let updated =
        heroes::update_many(&conn, doc! { "signed": true }, doc! { "alias": "Hawkeye" }).await?;
    info!("Heroes updated count: {}", updated);

    let hero = heroes::find_one(&conn, doc! { "alias": "Hawkeye" }).await?;
    info!("{} {} {}", hero.name, hero.alias, hero.signed);

    Ok(())
}
