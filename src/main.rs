use block_view_demo::components::app::App;
use block_view_demo::util::init_logging;

fn main() {
    init_logging(log::LevelFilter::Info);
    yew::Renderer::<App>::new().render();
}
