//! Thermal systems models.
//!
//! This module contains models for thermal systems, currently a heated pipe
//! carrying a single-phase fluid.

pub mod pipe;
