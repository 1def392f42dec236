// src/app/types.rs
use crate::api::ApiError;
use crate::model::MovieDetail;

// ---- navigation ----
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Route {
    List,
    Edit(String),
}

// ---- edit view lifecycle ----
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewPhase {
    Loading,    // initial GET in flight
    Ready,      // editable
    Submitting, // PATCH in flight
    Navigated,  // left the page; nothing more is applied
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Warning,
    Error,
}

/// What a view asks of the shell after handling an event.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Effect {
    Notify(ToastKind, String),
    Navigate(Route),
}

// ---- worker -> UI thread ----
#[derive(Debug)]
pub enum ApiMsg {
    Loaded(Result<MovieDetail, ApiError>),
    Updated(Result<(), ApiError>),
}
