//! # Edge Images
//!
//! Routes image references through an edge provider — a CDN endpoint that
//! resizes and transforms images on request via URL-encoded parameters
//! (Cloudflare-style `/cdn-cgi/image/...` URLs) — and produces the
//! responsive-image attribute values a host markup layer embeds into HTML.
//!
//! The crate never touches image bytes and never emits markup. Its contract
//! ends at validated, typed values: a transformed URL, a srcset ladder, a
//! constrained width/height pair, an assembled attribute set. Everything on
//! the other side of that line — hook wiring, sanitization, attachment
//! metadata lookup — belongs to the host.
//!
//! # Architecture: Pure Engine, Thin Assembly
//!
//! ```text
//! 1. Engine    (source, request)  →  TransformedUrl / SrcsetLadder
//! 2. Registry  size keyword       →  SizeProfile (width/height/fit)
//! 3. Assembly  profile + context  →  ImageAttrs (src, srcset, sizes, ...)
//! ```
//!
//! Every engine operation is a total, deterministic function over its
//! inputs: identical inputs yield byte-identical output. The one piece of
//! shared state — the resolved content-width ceiling — lives on an explicit
//! per-render [`context::RenderContext`], never in a process global.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Pure transform engine: provider URLs, srcset ladders, dimension math |
//! | [`config`] | `config.toml` loading, validation, merging; provider endpoint and breakpoints |
//! | [`context`] | Per-render state: the content-width ceiling cache |
//! | [`sizes`] | Named-size registry mapping size keywords to transform profiles |
//! | [`attrs`] | Attribute assembly — `src`/`srcset`/`sizes` values, class lists, container styles |
//!
//! # Design Decisions
//!
//! ## Sorted Query Keys
//!
//! Transform parameters serialize in ascending lexicographic key order,
//! always. Two call sites requesting the same rendition produce the same
//! bytes, so edge caches see one variant instead of `n!` orderings, and
//! test assertions can compare whole URLs.
//!
//! ## Context-Scoped Content Width
//!
//! The content-width ceiling is resolved once per render and cached on a
//! [`context::RenderContext`] owned by the caller. A process-wide mutable
//! ceiling would leak between requests in any long-lived server; an
//! explicit context costs one extra argument and removes that class of bug.
//!
//! ## Registry Over Reflection
//!
//! Size keywords (`"thumbnail"`, `"hero"`, ...) resolve through a
//! [`sizes::SizeRegistry`] built once at configuration time. Unknown
//! keywords fall back to the `large` profile rather than failing — the
//! registry is a convenience layer for hosts; the typed engine API
//! underneath stays strict.
//!
//! ## Values, Not Markup
//!
//! [`attrs::ImageAttrs`] carries finished attribute *values* (the string
//! that goes inside `srcset="..."`), leaving tag construction and
//! sanitization to the host. This keeps the crate usable from any
//! templating system and keeps escaping policy in exactly one place —
//! the host's.

pub mod attrs;
pub mod config;
pub mod context;
pub mod engine;
pub mod sizes;
