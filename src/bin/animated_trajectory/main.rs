use macroquad::prelude::Conf;

mod app;
mod constants;
mod render;
mod state;

fn window_conf() -> Conf {
    app::window_conf()
}

#[macroquad::main(window_conf)]
async fn main() {
    if let Err(err) = app::run().await {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}
