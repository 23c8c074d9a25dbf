use crate::render;
use coinpulse_core::{fitted_grid, vault_model, BoxInstance, CameraRig, SceneNode, SharedStore, VaultRig};
use glam::Vec3;
use instant::Instant;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

const SLOW_FRAME: Duration = Duration::from_millis(100);

/// Per-frame animator for the vault hero: reads the shared store, eases the
/// camera and the doors, and hands the flattened boxes to the GPU.
pub struct FrameContext {
    pub store: SharedStore,
    pub canvas: web::HtmlCanvasElement,
    pub gpu: Option<render::GpuState>,
    pub camera_rig: CameraRig,
    pub vault: SceneNode,
    pub rig: VaultRig,
    pub instances: Vec<BoxInstance>,
    pub last_instant: Instant,
}

impl FrameContext {
    pub fn new(store: SharedStore, canvas: web::HtmlCanvasElement, gpu: Option<render::GpuState>) -> Self {
        let vault = vault_model();
        let rig = VaultRig::bind(&vault);
        Self {
            store,
            canvas,
            gpu,
            camera_rig: CameraRig::default(),
            vault,
            rig,
            instances: Vec::new(),
            last_instant: Instant::now(),
        }
    }

    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt = now - self.last_instant;
        self.last_instant = now;
        if dt > SLOW_FRAME {
            log::debug!("[frame] slow frame {:?}", dt);
        }

        // Copy out and release the borrow before touching anything else.
        let state = self.store.borrow().snapshot();

        let (w, h) = (self.canvas.width(), self.canvas.height());
        let aspect = w as f32 / h.max(1) as f32;
        self.camera_rig.update(state.pointer, aspect);
        self.rig.apply(&mut self.vault, state.animation_offset);

        self.instances.clear();
        self.vault.flatten_into(Vec3::ZERO, &mut self.instances);

        let Some(gpu) = self.gpu.as_mut() else {
            return;
        };
        let camera = self.camera_rig.camera(aspect);
        let css_height = match self.canvas.client_height() {
            0 => h as f32,
            px => px as f32,
        };
        let grid = fitted_grid(camera.eye.z, camera.fovy_radians, aspect, css_height);
        gpu.resize_if_needed(w, h);
        match gpu.render(&camera, &self.instances, grid) {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => gpu.reconfigure(),
            Err(e) => log::error!("render error: {:?}", e),
        }
    }
}

pub async fn init_gpu(canvas: &web::HtmlCanvasElement) -> Option<render::GpuState> {
    match render::GpuState::new(canvas).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("WebGPU init error: {:?}", e);
            None
        }
    }
}

type Tick = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// Owns the `requestAnimationFrame` callback; dropping it cancels the
/// pending frame and releases the closure.
pub struct FrameLoop {
    tick: Tick,
    pending: Rc<Cell<Option<i32>>>,
}

fn request_frame(tick: &Tick, pending: &Cell<Option<i32>>) {
    let Some(w) = web::window() else {
        return;
    };
    let tick = tick.borrow();
    let Some(cb) = tick.as_ref() else {
        return;
    };
    match w.request_animation_frame(cb.as_ref().unchecked_ref()) {
        Ok(id) => pending.set(Some(id)),
        Err(e) => {
            pending.set(None);
            log::warn!("requestAnimationFrame rejected: {:?}", e);
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) -> FrameLoop {
    let tick: Tick = Rc::new(RefCell::new(None));
    let pending = Rc::new(Cell::new(None));
    let (tick_clone, pending_clone) = (tick.clone(), pending.clone());
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        pending_clone.set(None);
        frame_ctx.borrow_mut().frame();
        request_frame(&tick_clone, &pending_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick, &pending);
    FrameLoop { tick, pending }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        if let (Some(id), Some(w)) = (self.pending.take(), web::window()) {
            let _ = w.cancel_animation_frame(id);
        }
        self.tick.borrow_mut().take();
    }
}
