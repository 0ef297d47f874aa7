//! Dark Mode Demo entry point
//!
//! The browser build mounts the application shell into the page. The native
//! build runs the shell over in-memory storage and prints what it renders.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_app {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{Document, Element};

    use dark_mode_demo::consts::MOUNT_ELEMENT_ID;
    use dark_mode_demo::platform::web::{BodyClassList, LocalStorage};
    use dark_mode_demo::platform::{KeyValueStore, MemoryStore};
    use dark_mode_demo::{AppShell, HeaderContent, ToggleConfig, ToggleView};

    type Shell = AppShell<Box<dyn KeyValueStore>, BodyClassList>;

    pub fn run() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Dark Mode Demo starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");
        let body = document.body().expect("no body");

        let mount_point: Element = document
            .get_element_by_id(MOUNT_ELEMENT_ID)
            .unwrap_or_else(|| body.clone().into());
        let config =
            ToggleConfig::from_json_or_default(mount_point.get_attribute("data-config").as_deref());

        // Fall back to in-memory state when the browser denies storage
        let store: Box<dyn KeyValueStore> = match LocalStorage::open() {
            Some(storage) => Box::new(storage),
            None => {
                log::warn!("LocalStorage unavailable, preference will not persist");
                Box::new(MemoryStore::new())
            }
        };

        let shell = Rc::new(RefCell::new(AppShell::mount(
            &config,
            store,
            BodyClassList::new(body),
        )));

        let app = document.create_element("div")?;
        app.set_class_name("App");

        let button = document.create_element("button")?;
        render_toggle(&button, &shell.borrow().toggle_view())?;
        app.append_child(&button)?;

        let header = render_header(&document, shell.borrow().header())?;
        app.append_child(&header)?;

        setup_toggle_button(&button, shell.clone())?;

        mount_point.append_child(&app)?;

        log::info!("Dark Mode Demo running!");
        Ok(())
    }

    /// Sync the button's attributes and icon with the toggle view
    fn render_toggle(button: &Element, view: &ToggleView) -> Result<(), JsValue> {
        button.set_class_name(view.class_name);
        button.set_attribute("type", "button")?;
        button.set_attribute("data-testid", &view.test_id)?;
        button.set_attribute("aria-label", &view.aria_label)?;
        button.set_attribute("aria-pressed", if view.pressed { "true" } else { "false" })?;
        button.set_text_content(Some(view.icon));
        Ok(())
    }

    fn render_header(document: &Document, content: &HeaderContent) -> Result<Element, JsValue> {
        let header = document.create_element("header")?;
        header.set_class_name("App-header");

        let title = document.create_element("h1")?;
        title.set_text_content(Some(content.title));
        header.append_child(&title)?;

        let tagline = document.create_element("p")?;
        tagline.set_text_content(Some(content.tagline));
        header.append_child(&tagline)?;

        let feature = document.create_element("p")?;
        let label = document.create_element("strong")?;
        label.set_text_content(Some("New Feature:"));
        feature.append_child(&label)?;
        feature.append_with_str_1(&format!(" {}", content.feature_note))?;
        header.append_child(&feature)?;

        Ok(header)
    }

    fn setup_toggle_button(button: &Element, shell: Rc<RefCell<Shell>>) -> Result<(), JsValue> {
        let target = button.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::MouseEvent| {
            let view = shell.borrow_mut().click_toggle();
            if let Err(e) = render_toggle(&target, &view) {
                log::warn!("Toggle render error: {:?}", e);
            }
        });
        button.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
        closure.forget();
        Ok(())
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() -> Result<(), JsValue> {
    wasm_app::run()
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use dark_mode_demo::platform::{KeyValueStore, MemoryRoot, MemoryStore};
    use dark_mode_demo::{AppShell, ToggleConfig};

    env_logger::init();
    log::info!("Dark Mode Demo (native) starting...");
    log::info!("Native mode keeps state in memory - run with `trunk serve` for the web version");

    let config_json = std::env::var("DARK_MODE_CONFIG").ok();
    let config = ToggleConfig::from_json_or_default(config_json.as_deref());

    let store = MemoryStore::new();
    let root = MemoryRoot::new();
    let mut shell = AppShell::mount(&config, store.clone(), root.clone());

    let header = shell.header();
    println!("{}", header.title);
    println!("{}", header.tagline);
    println!("New Feature: {}", header.feature_note);

    let print_state = |label: &str, shell: &AppShell<MemoryStore, MemoryRoot>| {
        let view = shell.toggle_view();
        let stored = store
            .get_item(&config.storage_key)
            .ok()
            .flatten()
            .unwrap_or_else(|| "<none>".to_string());
        println!(
            "{:<8} [{}] {:<22} stored={:<6} markers={:?}",
            label,
            view.icon,
            view.aria_label,
            stored,
            root.markers()
        );
    };

    print_state("mount", &shell);
    for click in 1..=2 {
        shell.click_toggle();
        print_state(&format!("click {}", click), &shell);
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
