use std::cell::Cell;
use std::rc::{Rc, Weak};

use log::warn;
use wasm_bindgen::prelude::*;
use web_sys::Window;

use super::error::{DrawError, Result};

/// One-shot timer that calls back into its owner when it elapses.
pub trait Timer {
	/// Identifies a started timer.
	type Handle: Copy;

	/// Starts a timer; `None` if it could not be scheduled.
	fn start(&self, delay_ms: i32) -> Option<Self::Handle>;
	/// Stops a started timer.
	fn cancel(&self, handle: Self::Handle);
}

/// Trailing-edge debouncer: a burst of [`trigger`](Self::trigger) calls runs
/// the action once, `delay_ms` after the last call.
pub struct Debouncer<T: Timer> {
	timer: T,
	delay_ms: i32,
	pending: Cell<Option<T::Handle>>,
	detached: Cell<bool>,
	action: Box<dyn Fn()>,
}

impl<T: Timer> Debouncer<T> {
	/// Runs `action` through `timer`; `fire` must be called when it elapses.
	pub fn new(timer: T, delay_ms: i32, action: impl Fn() + 'static) -> Self {
		Self {
			timer,
			delay_ms,
			pending: Cell::new(None),
			detached: Cell::new(false),
			action: Box::new(action),
		}
	}

	/// Restarts the quiet period.
	pub fn trigger(&self) {
		if self.detached.get() {
			return;
		}
		if let Some(handle) = self.pending.take() {
			self.timer.cancel(handle);
		}
		self.pending.set(self.timer.start(self.delay_ms));
	}

	/// Called by the timer when the window elapses.
	pub fn fire(&self) {
		self.pending.set(None);
		if !self.detached.get() {
			(self.action)();
		}
	}

	/// Cancels any pending run; later triggers and fires do nothing.
	pub fn detach(&self) {
		self.detached.set(true);
		if let Some(handle) = self.pending.take() {
			self.timer.cancel(handle);
		}
	}

	/// A run is scheduled.
	pub fn is_pending(&self) -> bool {
		self.pending.get().is_some()
	}
}

/// [`Timer`] backed by `window.setTimeout` with a single reusable callback.
pub struct WindowTimer {
	window: Window,
	callback: Closure<dyn FnMut()>,
}

impl WindowTimer {
	/// Timer calling `on_elapsed` each time a started timeout elapses.
	pub fn new(window: Window, on_elapsed: impl FnMut() + 'static) -> Self {
		Self {
			window,
			callback: Closure::new(on_elapsed),
		}
	}
}

impl Timer for WindowTimer {
	type Handle = i32;

	fn start(&self, delay_ms: i32) -> Option<i32> {
		self.window
			.set_timeout_with_callback_and_timeout_and_arguments_0(
				self.callback.as_ref().unchecked_ref::<js_sys::Function>(),
				delay_ms,
			)
			.map_err(|err| warn!("failed to schedule redraw: {}", DrawError::from(err)))
			.ok()
	}

	fn cancel(&self, handle: i32) {
		self.window.clear_timeout_with_handle(handle);
	}
}

impl Debouncer<WindowTimer> {
	/// A debouncer whose timer fires through `window.setTimeout`.
	pub fn on_window(window: Window, delay_ms: i32, action: impl Fn() + 'static) -> Rc<Self> {
		Rc::new_cyclic(|this: &Weak<Self>| {
			let this = this.clone();
			let timer = WindowTimer::new(window, move || {
				if let Some(debouncer) = this.upgrade() {
					debouncer.fire();
				}
			});
			Debouncer::new(timer, delay_ms, action)
		})
	}
}

/// Keeps a debounced `resize` listener attached to the window.
///
/// The closure registered at attach time is owned here and is the one removed
/// on drop, which also cancels a pending debounced run.
pub struct ResizeSubscription {
	window: Window,
	listener: Closure<dyn FnMut()>,
	debouncer: Rc<Debouncer<WindowTimer>>,
}

impl ResizeSubscription {
	/// Registers a `resize` listener that triggers `debouncer`.
	pub fn attach(window: Window, debouncer: Rc<Debouncer<WindowTimer>>) -> Result<Self> {
		let target = Rc::downgrade(&debouncer);
		let listener = Closure::<dyn FnMut()>::new(move || {
			if let Some(debouncer) = target.upgrade() {
				debouncer.trigger();
			}
		});
		window
			.add_event_listener_with_callback("resize", listener.as_ref().unchecked_ref())
			.map_err(DrawError::from)?;
		Ok(Self {
			window,
			listener,
			debouncer,
		})
	}
}

impl Drop for ResizeSubscription {
	fn drop(&mut self) {
		let _ = self
			.window
			.remove_event_listener_with_callback("resize", self.listener.as_ref().unchecked_ref());
		self.debouncer.detach();
	}
}
