//! C ABI for the affective-resonance engine.
//!
//! Exposes one process-wide [`AffectEngine`], created on first use, together
//! with the stateless text statistics. All numbers cross the boundary as
//! `f32` (or `u64` for counts); strings go in as NUL-terminated UTF-8.
//!
//! # Strings
//!
//! - A null text pointer is treated as the empty string.
//! - Invalid UTF-8 is decoded lossily.
//! - Strings returned by this library are owned by the caller and must be
//!   released with [`resonance_string_free`].
//!
//! # Threads
//!
//! Every export may be called from any thread. State-touching exports are
//! serialized by the engine's lock.

use std::borrow::Cow;
use std::ffi::{c_char, CStr, CString};
use std::sync::OnceLock;

use resonance_core::{char_entropy, perplexity, semantic_distance, word_entropy, AffectEngine};

/// Returned by [`resonance_find_nearest_attractor`] when no attractor is
/// within [`MAX_ATTRACTOR_DISTANCE`] or the name cannot be represented as a C
/// string.
const FALLBACK_ATTRACTOR: &str = "neutral";

/// Query points at least this far from every attractor, or with a non-finite
/// distance (NaN coordinates), have no nearest attractor.
const MAX_ATTRACTOR_DISTANCE: f32 = 100.0;

static ENGINE: OnceLock<AffectEngine> = OnceLock::new();

fn engine() -> &'static AffectEngine {
    ENGINE.get_or_init(|| {
        tracing::debug!("Initializing process-wide affect engine");
        AffectEngine::new()
    })
}

/// Borrow a C string as UTF-8, treating null as `""`.
///
/// # Safety
///
/// `ptr` must be null or point to a NUL-terminated string that stays valid
/// for the returned lifetime.
unsafe fn text_arg<'a>(ptr: *const c_char) -> Cow<'a, str> {
    if ptr.is_null() {
        return Cow::Borrowed("");
    }
    // SAFETY: non-null and NUL-terminated per the caller contract.
    unsafe { CStr::from_ptr(ptr) }.to_string_lossy()
}

fn into_c_string(value: &str) -> *mut c_char {
    match CString::new(value) {
        Ok(s) => s.into_raw(),
        Err(e) => {
            tracing::warn!(error = %e, "String contains interior NUL; using fallback");
            CString::new(FALLBACK_ATTRACTOR)
                .map(CString::into_raw)
                .unwrap_or(std::ptr::null_mut())
        }
    }
}

// =============================================================================
// STATE
// =============================================================================

/// Current valence of the process-wide engine.
#[no_mangle]
pub extern "C" fn resonance_get_valence() -> f32 {
    engine().valence()
}

/// Current arousal of the process-wide engine.
#[no_mangle]
pub extern "C" fn resonance_get_arousal() -> f32 {
    engine().arousal()
}

/// Current informational entropy of the process-wide engine.
#[no_mangle]
pub extern "C" fn resonance_get_entropy() -> f32 {
    engine().entropy()
}

/// Number of drift steps since start or the last reset.
#[no_mangle]
pub extern "C" fn resonance_message_count() -> u64 {
    engine().message_count()
}

/// Apply one drift step toward `(input_valence, input_arousal)`.
///
/// Inputs must be finite. NaN or infinite values are not rejected and leave
/// the state undefined.
#[no_mangle]
pub extern "C" fn resonance_drift(input_valence: f32, input_arousal: f32) {
    engine().drift(input_valence, input_arousal);
}

/// Restore valence, arousal, prediction, momentum and count to their initial
/// values. Entropy is kept.
#[no_mangle]
pub extern "C" fn resonance_reset_state() {
    engine().reset();
}

/// Appraise `text` and apply the resulting stimulus as one drift step.
///
/// # Safety
///
/// `text` must be null or a valid NUL-terminated string.
#[no_mangle]
pub unsafe extern "C" fn resonance_observe_text(text: *const c_char) {
    let text = unsafe { text_arg(text) };
    engine().observe_text(&text);
}

// =============================================================================
// ATTRACTORS
// =============================================================================

/// Name of the attractor nearest to `(valence, arousal)`.
///
/// Returns `"neutral"` when the point is at least [`MAX_ATTRACTOR_DISTANCE`]
/// from every attractor or its coordinates are NaN.
///
/// The returned string is owned by the caller and must be released with
/// [`resonance_string_free`].
#[no_mangle]
pub extern "C" fn resonance_find_nearest_attractor(valence: f32, arousal: f32) -> *mut c_char {
    into_c_string(nearest_attractor_name(engine(), valence, arousal))
}

fn nearest_attractor_name(engine: &AffectEngine, valence: f32, arousal: f32) -> &str {
    let nearest = engine.field().nearest(valence, arousal);
    let distance = nearest.distance_to(valence, arousal);
    if distance.is_nan() || distance >= MAX_ATTRACTOR_DISTANCE {
        tracing::debug!(valence, arousal, "No attractor in range; using fallback");
        return FALLBACK_ATTRACTOR;
    }
    &nearest.name
}

/// Write the attractor pull at `(valence, arousal)` into the out-pointers.
///
/// Null out-pointers are skipped.
///
/// # Safety
///
/// Each non-null pointer must be valid for a write of one `f32`.
#[no_mangle]
pub unsafe extern "C" fn resonance_compute_attractor_pull(
    valence: f32,
    arousal: f32,
    out_dv: *mut f32,
    out_da: *mut f32,
) {
    let (dv, da) = engine().attractor_pull(valence, arousal);
    if !out_dv.is_null() {
        // SAFETY: non-null and writable per the caller contract.
        unsafe { *out_dv = dv };
    }
    if !out_da.is_null() {
        // SAFETY: as above.
        unsafe { *out_da = da };
    }
}

// =============================================================================
// TEXT
// =============================================================================

/// Word entropy of `text`.
///
/// # Safety
///
/// `text` must be null or a valid NUL-terminated string.
#[no_mangle]
pub unsafe extern "C" fn resonance_entropy(text: *const c_char) -> f32 {
    word_entropy(&unsafe { text_arg(text) }).entropy
}

/// Lexicon valence of `text`, diluted by its token count.
///
/// # Safety
///
/// `text` must be null or a valid NUL-terminated string.
#[no_mangle]
pub unsafe extern "C" fn resonance_emotional_score(text: *const c_char) -> f32 {
    word_entropy(&unsafe { text_arg(text) }).emotional_score
}

/// Character entropy of `text`.
///
/// # Safety
///
/// `text` must be null or a valid NUL-terminated string.
#[no_mangle]
pub unsafe extern "C" fn resonance_char_entropy(text: *const c_char) -> f32 {
    char_entropy(&unsafe { text_arg(text) })
}

/// Character-bigram perplexity of `text`.
///
/// # Safety
///
/// `text` must be null or a valid NUL-terminated string.
#[no_mangle]
pub unsafe extern "C" fn resonance_perplexity(text: *const c_char) -> f32 {
    perplexity(&unsafe { text_arg(text) })
}

/// Bag-of-words cosine distance between `a` and `b`.
///
/// # Safety
///
/// `a` and `b` must each be null or a valid NUL-terminated string.
#[no_mangle]
pub unsafe extern "C" fn resonance_semantic_distance(a: *const c_char, b: *const c_char) -> f32 {
    let a = unsafe { text_arg(a) };
    let b = unsafe { text_arg(b) };
    semantic_distance(&a, &b)
}

/// Release a string returned by this library. Null is a no-op.
///
/// # Safety
///
/// `ptr` must be null or a pointer previously returned by this library and
/// not yet freed.
#[no_mangle]
pub unsafe extern "C" fn resonance_string_free(ptr: *mut c_char) {
    if ptr.is_null() {
        return;
    }
    // SAFETY: allocated by `CString::into_raw` in this crate.
    drop(unsafe { CString::from_raw(ptr) });
}
