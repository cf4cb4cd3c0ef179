//! Scroll-wheel picker components for the Tessera UI framework.
//!
//! The crate provides [`wheel::wheel`], a scroll-wheel selector that snaps to
//! one row out of a vertical list, and [`time_picker::time_picker`], an
//! iOS-style clock picker composed from three such wheels. Both are
//! controlled components: the host owns the value and adopts changes reported
//! through callbacks.
//!
//! # Usage
//!
//! The components render through `tessera-components`, so register its
//! pipelines and provide a material theme.
//!
//! ```no_run
//! use tessera_components::theme::{MaterialTheme, material_theme};
//! use tessera_wheel_picker::time_picker::{TimePickerArgs, time_picker};
//!
//! fn app() {
//!     material_theme(MaterialTheme::default, || {
//!         time_picker(&TimePickerArgs::default().value("09:30"));
//!     });
//! }
//!
//! tessera_ui::entry!(app, pipelines = [tessera_components]);
//! ```
//!
//! # Example
//!
//! ```
//! # use tessera_ui::tessera;
//! # #[tessera]
//! # fn component() {
//! use tessera_ui::remember;
//! use tessera_wheel_picker::wheel::{WheelArgs, wheel};
//! # use tessera_components::theme::{MaterialTheme, material_theme};
//! # use tessera_components::text::text;
//! # material_theme(MaterialTheme::default, || {
//!
//! let labels = ["Low", "Medium", "High"];
//! wheel(
//!     WheelArgs::default()
//!         .item_count(labels.len())
//!         .on_change(|index| println!("picked {index}")),
//!     move |index, _selected| text(labels[index].to_string()),
//! );
//! # });
//! # }
//! # component();
//! ```
#![deny(missing_docs, clippy::unwrap_used)]

pub mod locale;
pub mod time_format;
pub mod time_picker;
pub mod wheel;
