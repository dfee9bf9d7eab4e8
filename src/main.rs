//! Ray Folio entry point
//!
//! Handles platform-specific initialization and runs the frame loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_site {
    use std::cell::RefCell;
    use std::rc::Rc;

    use glam::Vec2;
    use wasm_bindgen::prelude::*;
    use wasm_bindgen_futures::JsFuture;
    use web_sys::{Document, HtmlCanvasElement, HtmlImageElement, MouseEvent, WheelEvent};

    use ray_folio::Settings;
    use ray_folio::consts::CUBE_IMAGES;
    use ray_folio::renderer::{RenderState, scene};
    use ray_folio::sim::{AppState, Command, ContactForm, SiteEvent, handle_event, tick};
    use ray_folio::ui::{self, OverlayItem};

    /// Id of the container the contact inputs are built in
    const CONTACT_FORM_ID: &str = "contact-form";

    /// Site instance holding all state
    struct Site {
        state: AppState,
        render_state: Option<RenderState>,
        /// Input received since the last frame, in arrival order
        pending: Vec<SiteEvent>,
        /// Last overlay written to the DOM, to skip unchanged elements
        last_overlay: Vec<OverlayItem>,
        canvas: HtmlCanvasElement,
        cursor_hidden: Option<bool>,
    }

    impl Site {
        fn new(canvas: HtmlCanvasElement, viewport: Vec2, settings: Settings, seed: u64) -> Self {
            Self {
                state: AppState::new(viewport, settings, seed),
                render_state: None,
                pending: Vec::new(),
                last_overlay: Vec::new(),
                canvas,
                cursor_hidden: None,
            }
        }

        /// Apply queued input, then advance one frame
        fn update(&mut self) {
            for event in std::mem::take(&mut self.pending) {
                let commands = handle_event(&mut self.state, event);
                for command in commands {
                    run_command(command);
                }
                if event == SiteEvent::ContactSent && self.state.contact_form == ContactForm::Sent {
                    remove_contact_form();
                }
            }
            tick(&mut self.state);
        }

        /// Render the current frame
        fn render(&mut self) {
            if let Some(ref mut render_state) = self.render_state {
                let frame = scene::build(&self.state);
                match render_state.render(&frame) {
                    Ok(_) => {}
                    Err(wgpu::SurfaceError::Lost) => {
                        let (w, h) = render_state.size;
                        let logical = render_state.logical;
                        render_state.resize(w, h, logical);
                    }
                    Err(wgpu::SurfaceError::OutOfMemory) => {
                        log::error!("Out of memory!");
                    }
                    Err(e) => log::warn!("Render error: {:?}", e),
                }
            }
        }

        /// Position and show/hide the host-page overlay elements
        fn update_overlay(&mut self) {
            let Some(document) = web_sys::window().and_then(|w| w.document()) else {
                return;
            };
            let items = ui::overlay(&self.state);
            for (i, item) in items.iter().enumerate() {
                if self.last_overlay.get(i) == Some(item) {
                    continue;
                }
                apply_overlay_item(&document, item);
            }
            self.last_overlay = items;

            let hidden = ui::hides_cursor(self.state.view);
            if self.cursor_hidden != Some(hidden) {
                let cursor = if hidden { "none" } else { "default" };
                let _ = self.canvas.set_attribute("style", &format!("cursor:{};", cursor));
                self.cursor_hidden = Some(hidden);
            }
        }
    }

    fn apply_overlay_item(document: &Document, item: &OverlayItem) {
        let Some(el) = document.get_element_by_id(&item.id) else {
            return;
        };
        let mut style = format!(
            "position:absolute;left:{:.1}px;top:{:.1}px;transform:{} scale({:.3});transform-origin:{};display:{};z-index:{};",
            item.pos.x,
            item.pos.y,
            item.anchor.css_translate(),
            item.scale,
            match item.anchor {
                ui::Anchor::TopLeft => "top left",
                ui::Anchor::Center => "center",
                ui::Anchor::LeftCenter => "left center",
            },
            if item.visible { "block" } else { "none" },
            if item.below_canvas { 0 } else { 2 },
        );
        if let Some([r, g, b]) = item.color {
            style.push_str(&format!("color:rgb({},{},{});", r, g, b));
        }
        if let Some(width) = item.width {
            style.push_str(&format!("width:{:.1}px;", width));
        }
        let _ = el.set_attribute("style", &style);
        if let Some(text) = item.text {
            el.set_text_content(Some(text));
        }
    }

    fn run_command(command: Command) {
        match command {
            Command::OpenUrl(url) => {
                if let Some(window) = web_sys::window() {
                    if window.open_with_url_and_target(url, "_blank").is_err() {
                        log::warn!("Could not open {}", url);
                    }
                }
            }
            Command::ShowContactForm => show_contact_form(),
            Command::RemoveContactForm => remove_contact_form(),
        }
    }

    fn show_contact_form() {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };
        if document.get_element_by_id(CONTACT_FORM_ID).is_some() {
            return;
        }
        let Some(body) = document.body() else {
            return;
        };
        let Ok(form) = document.create_element("div") else {
            return;
        };
        form.set_id(CONTACT_FORM_ID);
        let _ = form.set_attribute("class", "contact-form");

        for placeholder in ["Name", "Email", "Your idea"] {
            if let Ok(input) = document.create_element("input") {
                let _ = input.set_attribute("type", "text");
                let _ = input.set_attribute("placeholder", placeholder);
                let _ = form.append_child(&input);
            }
        }
        if let Ok(button) = document.create_element("button") {
            button.set_id("contact-send");
            button.set_text_content(Some("Send"));
            let _ = form.append_child(&button);
        }
        let _ = body.append_child(&form);
        log::info!("Contact form shown");
    }

    fn remove_contact_form() {
        if let Some(form) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(CONTACT_FORM_ID))
        {
            form.remove();
            log::info!("Contact form removed");
        }
    }

    /// Canvas size in CSS pixels and in device pixels
    fn canvas_size(canvas: &HtmlCanvasElement) -> (Vec2, u32, u32) {
        let dpr = web_sys::window().map(|w| w.device_pixel_ratio()).unwrap_or(1.0);
        let client_w = canvas.client_width().max(1);
        let client_h = canvas.client_height().max(1);
        (
            Vec2::new(client_w as f32, client_h as f32),
            (client_w as f64 * dpr) as u32,
            (client_h as f64 * dpr) as u32,
        )
    }

    pub async fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Ray Folio starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");

        let (viewport, width, height) = canvas_size(&canvas);
        canvas.set_width(width);
        canvas.set_height(height);

        let settings = Settings::load();
        let seed = settings.seed.unwrap_or_else(|| js_sys::Date::now() as u64);
        let site = Rc::new(RefCell::new(Site::new(canvas.clone(), viewport, settings, seed)));

        // Initialize WebGPU, falling back to WebGL2
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::BROWSER_WEBGPU | wgpu::Backends::GL,
            ..Default::default()
        });

        let surface = instance
            .create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))
            .expect("Failed to create surface");

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .expect("Failed to get adapter");

        log::info!("Using adapter: {:?}", adapter.get_info().name);

        let render_state = RenderState::new(surface, &adapter, width, height, viewport).await;
        site.borrow_mut().render_state = Some(render_state);
        load_cube_textures(site.clone());

        setup_input_handlers(&canvas, site.clone());
        setup_home_button(&document);
        setup_contact_send(&document, site.clone());

        if let Some(loading) = document.get_element_by_id("loading") {
            let _ = loading.set_attribute("class", "hidden");
        }

        request_animation_frame(site);

        log::info!("Ray Folio running!");
    }

    async fn load_image(url: &str) -> Result<HtmlImageElement, JsValue> {
        let image = HtmlImageElement::new()?;
        image.set_src(url);
        JsFuture::from(image.decode()).await?;
        Ok(image)
    }

    /// Fetch the cube images in the background; faces stay tinted until then
    fn load_cube_textures(site: Rc<RefCell<Site>>) {
        for (slot, &url) in CUBE_IMAGES.iter().enumerate() {
            let site = site.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match load_image(url).await {
                    Ok(image) => {
                        if let Some(ref mut render_state) = site.borrow_mut().render_state {
                            render_state.load_face_texture(slot, &image);
                            log::info!("Loaded cube image {}", url);
                        }
                    }
                    Err(e) => log::warn!("Could not load cube image {}: {:?}", url, e),
                }
            });
        }
    }

    fn setup_input_handlers(canvas: &HtmlCanvasElement, site: Rc<RefCell<Site>>) {
        // Pointer move
        {
            let site = site.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                let p = Vec2::new(event.offset_x() as f32, event.offset_y() as f32);
                site.borrow_mut().pending.push(SiteEvent::PointerMove(p));
            });
            let _ = canvas
                .add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Pointer press
        {
            let site = site.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                let p = Vec2::new(event.offset_x() as f32, event.offset_y() as f32);
                site.borrow_mut().pending.push(SiteEvent::PointerDown(p));
            });
            let _ = canvas
                .add_event_listener_with_callback("mousedown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Wheel
        {
            let site = site.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: WheelEvent| {
                event.prevent_default();
                site.borrow_mut()
                    .pending
                    .push(SiteEvent::Scroll(event.delta_y() as f32));
            });
            let _ = canvas
                .add_event_listener_with_callback("wheel", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Window resize
        {
            let canvas = canvas.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
                let (viewport, width, height) = canvas_size(&canvas);
                canvas.set_width(width);
                canvas.set_height(height);
                let mut s = site.borrow_mut();
                if let Some(ref mut render_state) = s.render_state {
                    render_state.resize(width, height, viewport);
                }
                s.pending.push(SiteEvent::Resize(viewport));
            });
            if let Some(window) = web_sys::window() {
                let _ = window
                    .add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
            }
            closure.forget();
        }
    }

    /// Home reloads the page rather than resetting state
    fn setup_home_button(document: &Document) {
        if let Some(btn) = document.get_element_by_id("home") {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                if let Some(window) = web_sys::window() {
                    let _ = window.location().reload();
                }
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    /// The form is rebuilt on every visit, so listen on the document
    fn setup_contact_send(document: &Document, site: Rc<RefCell<Site>>) {
        let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
            let is_send = event
                .target()
                .and_then(|t| t.dyn_into::<web_sys::Element>().ok())
                .is_some_and(|el| el.id() == "contact-send");
            if is_send {
                site.borrow_mut().pending.push(SiteEvent::ContactSent);
            }
        });
        let _ = document.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn request_animation_frame(site: Rc<RefCell<Site>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::once(move |_time: f64| {
            site_loop(site);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn site_loop(site: Rc<RefCell<Site>>) {
        {
            let mut s = site.borrow_mut();
            s.update();
            s.render();
            s.update_overlay();
        }

        request_animation_frame(site);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() {
    wasm_site::run().await;
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Ray Folio (native) starting...");
    log::info!("Native mode runs a headless walkthrough - use `trunk serve` for the web version");

    let path = std::env::args().nth(1);
    let settings = ray_folio::Settings::load_from(path.as_deref());
    walkthrough(settings);
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

/// Drive the site through every section without a window and report what
/// each frame would draw
#[cfg(not(target_arch = "wasm32"))]
fn walkthrough(settings: ray_folio::Settings) {
    use glam::Vec2;
    use ray_folio::renderer::scene;
    use ray_folio::sim::{AppState, SiteEvent, handle_event, tick};

    let viewport = Vec2::new(1280.0, 720.0);
    let seed = settings.seed.unwrap_or(0x5eed);
    let mut state = AppState::new(viewport, settings, seed);
    let layout = state.layout();
    let center = layout.center();
    let back = layout.back_button().center();
    let about = layout.menu_anchor(ray_folio::sim::Section::About) + Vec2::new(10.0, 0.0);

    let script = [
        SiteEvent::PointerDown(about),
        SiteEvent::PointerMove(center + Vec2::new(150.0, 40.0)),
        SiteEvent::PointerDown(center),
        SiteEvent::PointerDown(back),
        SiteEvent::Scroll(-100.0),
        SiteEvent::PointerMove(center),
        SiteEvent::Scroll(-100.0),
        SiteEvent::PointerDown(center + Vec2::new(300.0, 200.0)),
        SiteEvent::Scroll(-100.0),
        SiteEvent::PointerDown(center),
        SiteEvent::ContactSent,
        SiteEvent::PointerDown(back),
        SiteEvent::Scroll(-100.0),
        SiteEvent::PointerMove(center + Vec2::new(-100.0, 50.0)),
    ];

    for event in script {
        let commands = handle_event(&mut state, event);
        for command in commands {
            log::info!("Host command: {:?}", command);
        }
        for _ in 0..30 {
            tick(&mut state);
        }
        let frame = scene::build(&state);
        log::info!(
            "{:?}: {} beams, {} flashes, {} triangles, {} textured faces",
            state.view,
            state.cast_rays().len(),
            state.flashes.len(),
            frame.vertices.len() / 3,
            frame.faces.len()
        );
    }

    println!("Walkthrough finished after {} frames", state.frame);
}
