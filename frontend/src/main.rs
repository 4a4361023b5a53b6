use frontend::App;
use yew::Renderer;

fn main() {
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("starting prediction client");

    Renderer::<App>::new().render();
}
