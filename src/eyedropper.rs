//! macOS screen color sampler.
//!
//! Drives `NSColorSampler` over the Objective-C runtime. The sampler is
//! asynchronous: macOS shows a magnifier, the user clicks a pixel, and the
//! selection handler fires with the sampled `NSColor` (or nil on Esc).

use std::cell::Cell;

use block2::RcBlock;
use objc2::rc::{Allocated, Id};
use objc2::runtime::{AnyClass, AnyObject};
use objc2::{msg_send, msg_send_id};

use crate::color::Rgba;

/// Whether the running system has `NSColorSampler` (macOS 10.15+).
pub(crate) fn is_available() -> bool {
    AnyClass::get("NSColorSampler").is_some()
}

/// Open the screen sampler; `on_pick` receives the picked pixel in sRGB.
/// Cancelling drops `on_pick` without calling it.
///
/// Must be called from the main thread (Floem event handlers satisfy this).
pub(crate) fn sample_color(on_pick: impl FnOnce(Rgba) + 'static) {
    let Some(cls) = AnyClass::get("NSColorSampler") else {
        log::warn!("NSColorSampler is not available");
        return;
    };

    let sampler: Allocated<AnyObject> = unsafe { msg_send_id![cls, alloc] };
    let sampler: Id<AnyObject> = unsafe { msg_send_id![sampler, init] };

    type Callback = Cell<Option<Box<dyn FnOnce(Rgba)>>>;
    let callback: Callback = Cell::new(Some(Box::new(on_pick)));

    let block = RcBlock::new(move |color_ptr: *mut AnyObject| {
        if color_ptr.is_null() {
            log::debug!("screen sampler cancelled");
            return;
        }
        if let Some(picked) = unsafe { to_srgb(color_ptr) }
            && let Some(cb) = callback.take()
        {
            cb(picked);
        }
    });

    unsafe {
        let _: () = msg_send![&*sampler, showSamplerWithSelectionHandler: &*block];
    }
}

/// Convert an `NSColor` to sRGB components.
///
/// # Safety
///
/// `color_ptr` must point to a live `NSColor`.
unsafe fn to_srgb(color_ptr: *mut AnyObject) -> Option<Rgba> {
    let space_cls = AnyClass::get("NSColorSpace")?;
    unsafe {
        let srgb: *const AnyObject = msg_send![space_cls, sRGBColorSpace];
        if srgb.is_null() {
            return None;
        }
        let converted: *const AnyObject = msg_send![&*color_ptr, colorUsingColorSpace: &*srgb];
        if converted.is_null() {
            return None;
        }
        let (mut r, mut g, mut b, mut a) = (0.0_f64, 0.0_f64, 0.0_f64, 0.0_f64);
        let _: () = msg_send![
            &*converted,
            getRed: &mut r,
            green: &mut g,
            blue: &mut b,
            alpha: &mut a
        ];
        Some(Rgba::from_unit(r, g, b, a))
    }
}
