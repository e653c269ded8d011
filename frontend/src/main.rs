use kc2drop_frontend::App;
use yew::Renderer;

fn main() {
    wasm_logger::init(wasm_logger::Config::new(log::Level::Debug));

    Renderer::<App>::new().render();
}
