//! Adaptadores de pantalla completa.
//!
//! El entorno concede o deniega los cambios cuando quiere, así que nadie lee el
//! resultado de `enter`/`exit`: los cambios llegan a los oyentes desde `sync`,
//! que se llama una vez por frame.

use log::debug;

pub type ListenerId = u64;
pub type FullscreenListener = Box<dyn FnMut(bool)>;

pub trait FullscreenController {
    fn is_supported(&self) -> bool;
    /// Último estado observado del entorno.
    fn is_fullscreen(&self) -> bool;
    fn enter(&mut self);
    fn exit(&mut self);
    fn subscribe(&mut self, listener: FullscreenListener) -> ListenerId;
    fn unsubscribe(&mut self, id: ListenerId);
    /// Observa el entorno y avisa a los oyentes si el estado cambió.
    fn sync(&mut self);
}

#[derive(Default)]
pub struct Listeners {
    next_id: ListenerId,
    entries: Vec<(ListenerId, FullscreenListener)>,
}

impl Listeners {
    pub fn add(&mut self, listener: FullscreenListener) -> ListenerId {
        let id = self.next_id;
        self.next_id += 1;
        self.entries.push((id, listener));
        id
    }

    pub fn remove(&mut self, id: ListenerId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(entry_id, _)| *entry_id != id);
        self.entries.len() != before
    }

    pub fn notify(&mut self, fullscreen: bool) {
        for (_, listener) in self.entries.iter_mut() {
            listener(fullscreen);
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Ventana nativa de eframe: se controla con `ViewportCommand::Fullscreen`.
pub struct ViewportFullscreen {
    ctx: egui::Context,
    known: bool,
    listeners: Listeners,
}

impl ViewportFullscreen {
    pub fn new(ctx: egui::Context, initially_fullscreen: bool) -> Self {
        Self {
            ctx,
            known: initially_fullscreen,
            listeners: Listeners::default(),
        }
    }
}

impl FullscreenController for ViewportFullscreen {
    fn is_supported(&self) -> bool {
        true
    }

    fn is_fullscreen(&self) -> bool {
        self.known
    }

    fn enter(&mut self) {
        self.ctx
            .send_viewport_cmd(egui::ViewportCommand::Fullscreen(true));
    }

    fn exit(&mut self) {
        self.ctx
            .send_viewport_cmd(egui::ViewportCommand::Fullscreen(false));
    }

    fn subscribe(&mut self, listener: FullscreenListener) -> ListenerId {
        self.listeners.add(listener)
    }

    fn unsubscribe(&mut self, id: ListenerId) {
        self.listeners.remove(id);
    }

    fn sync(&mut self) {
        // None mientras el backend aún no ha informado del estado de la ventana
        let observed = self.ctx.input(|i| i.viewport().fullscreen);
        if let Some(now) = observed {
            if now != self.known {
                debug!("pantalla completa (ventana): {now}");
                self.known = now;
                self.listeners.notify(now);
            }
        }
    }
}

/// API Fullscreen del DOM para la versión web.
#[cfg(target_arch = "wasm32")]
pub struct DomFullscreen {
    known: bool,
    listeners: Listeners,
}

#[cfg(target_arch = "wasm32")]
impl DomFullscreen {
    /// Parte del estado actual del documento: al recargar la página se sale de
    /// pantalla completa sin que llegue ningún evento de cambio.
    pub fn new() -> Self {
        let mut this = Self {
            known: false,
            listeners: Listeners::default(),
        };
        this.known = this.observe();
        this
    }

    fn document() -> Option<web_sys::Document> {
        web_sys::window()?.document()
    }

    fn observe(&self) -> bool {
        Self::document()
            .and_then(|d| d.fullscreen_element())
            .is_some()
    }
}

#[cfg(target_arch = "wasm32")]
impl Default for DomFullscreen {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(target_arch = "wasm32")]
impl FullscreenController for DomFullscreen {
    fn is_supported(&self) -> bool {
        Self::document()
            .map(|d| d.fullscreen_enabled())
            .unwrap_or(false)
    }

    fn is_fullscreen(&self) -> bool {
        self.known
    }

    fn enter(&mut self) {
        let element = Self::document().and_then(|d| d.document_element());
        if let Some(element) = element {
            if let Err(e) = element.request_fullscreen() {
                log::warn!("el navegador rechazó la pantalla completa: {e:?}");
            }
        }
    }

    fn exit(&mut self) {
        if let Some(document) = Self::document() {
            document.exit_fullscreen();
        }
    }

    fn subscribe(&mut self, listener: FullscreenListener) -> ListenerId {
        self.listeners.add(listener)
    }

    fn unsubscribe(&mut self, id: ListenerId) {
        self.listeners.remove(id);
    }

    fn sync(&mut self) {
        let now = self.observe();
        if now != self.known {
            debug!("pantalla completa (DOM): {now}");
            self.known = now;
            self.listeners.notify(now);
        }
    }
}

/// Entorno sin pantalla completa: las peticiones se ignoran sin error.
#[derive(Default)]
pub struct NoFullscreen {
    listeners: Listeners,
}

impl FullscreenController for NoFullscreen {
    fn is_supported(&self) -> bool {
        false
    }

    fn is_fullscreen(&self) -> bool {
        false
    }

    fn enter(&mut self) {}

    fn exit(&mut self) {}

    fn subscribe(&mut self, listener: FullscreenListener) -> ListenerId {
        self.listeners.add(listener)
    }

    fn unsubscribe(&mut self, id: ListenerId) {
        self.listeners.remove(id);
    }

    fn sync(&mut self) {}
}

#[cfg(test)]
pub mod testing {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    struct Scripted {
        supported: bool,
        environment: bool,
        known: bool,
        requests: Vec<bool>,
        listeners: Listeners,
    }

    /// Controlador manejado a mano desde los tests. Los clones comparten estado.
    #[derive(Clone)]
    pub struct ScriptedFullscreen {
        inner: Rc<RefCell<Scripted>>,
    }

    impl ScriptedFullscreen {
        pub fn new(supported: bool) -> Self {
            Self {
                inner: Rc::new(RefCell::new(Scripted {
                    supported,
                    environment: false,
                    known: false,
                    requests: Vec::new(),
                    listeners: Listeners::default(),
                })),
            }
        }

        /// El entorno concede la última petición pendiente.
        pub fn grant(&self) {
            let mut inner = self.inner.borrow_mut();
            if let Some(last) = inner.requests.last().copied() {
                inner.environment = last;
            }
        }

        /// Cambio ajeno a la app (tecla Escape, gestor de ventanas...).
        pub fn set_environment(&self, fullscreen: bool) {
            self.inner.borrow_mut().environment = fullscreen;
        }

        pub fn requests(&self) -> Vec<bool> {
            self.inner.borrow().requests.clone()
        }

        pub fn listener_count(&self) -> usize {
            self.inner.borrow().listeners.len()
        }
    }

    impl FullscreenController for ScriptedFullscreen {
        fn is_supported(&self) -> bool {
            self.inner.borrow().supported
        }

        fn is_fullscreen(&self) -> bool {
            self.inner.borrow().known
        }

        fn enter(&mut self) {
            self.inner.borrow_mut().requests.push(true);
        }

        fn exit(&mut self) {
            self.inner.borrow_mut().requests.push(false);
        }

        fn subscribe(&mut self, listener: FullscreenListener) -> ListenerId {
            self.inner.borrow_mut().listeners.add(listener)
        }

        fn unsubscribe(&mut self, id: ListenerId) {
            self.inner.borrow_mut().listeners.remove(id);
        }

        fn sync(&mut self) {
            let mut inner = self.inner.borrow_mut();
            if inner.environment != inner.known {
                let now = inner.environment;
                inner.known = now;
                inner.listeners.notify(now);
            }
        }
    }
}
