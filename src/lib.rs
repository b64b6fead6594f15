use rocket::fairing::AdHoc;
use rocket::figment::Figment;
use rocket::{routes, Build, Rocket};
use tracing::info;

pub mod config;
pub mod data;
pub mod internal_error;
pub mod request_error;
pub mod todo;

#[cfg(test)]
mod tests;

use todo::endpoints;

pub fn rocket_from(figment: Figment) -> Rocket<Build> {
    rocket::custom(figment)
        .attach(data::stage())
        .attach(data::shutdown())
        .attach(AdHoc::on_liftoff("Startup Banner", |rocket| {
            Box::pin(async move {
                let config = rocket.config();
                info!("Server starting at {}:{}/", config.address, config.port);
            })
        }))
        .mount(
            "/",
            routes![
                endpoints::get_todos,
                endpoints::get_todo,
                endpoints::get_agenda,
                endpoints::add_todo,
                endpoints::update_todo,
                endpoints::delete_todo,
            ],
        )
}

pub fn rocket() -> Rocket<Build> {
    rocket_from(config::figment())
}
