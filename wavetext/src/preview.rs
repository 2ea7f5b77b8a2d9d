// Copyright 2024-2025 Cornell University
// released under BSD 3-Clause License
// author: Kevin Laeufer <laeufer@cornell.edu>
//
// Preview panel and live refresh state for editor integrations. The editor itself is
// abstracted behind `PreviewHost`, this module only tracks who owns what.

use crate::simple::convert_str_with_options;
use crate::{RenderOptions, WavetextError};
use std::fmt::Debug;

/// Services that an editor provides to the preview.
pub trait PreviewHost {
    /// Identifies a document that can be watched for changes.
    type DocumentId: Clone + PartialEq + Debug;
    /// Active change notification. Must be handed back to [`PreviewHost::unsubscribe`].
    type Subscription;
    type Panel;

    fn create_panel(&mut self) -> Self::Panel;
    fn reveal_panel(&mut self, panel: &mut Self::Panel);
    fn set_panel_content(&mut self, panel: &mut Self::Panel, content: &str);
    fn dispose_panel(&mut self, panel: Self::Panel);
    fn subscribe(&mut self, document: &Self::DocumentId) -> Self::Subscription;
    fn unsubscribe(&mut self, subscription: Self::Subscription);
    fn show_error(&mut self, error: &WavetextError);
}

/// Owns at most one panel.
#[derive(Debug)]
pub struct PanelSlot<P> {
    panel: Option<P>,
}

impl<P> Default for PanelSlot<P> {
    fn default() -> Self {
        Self { panel: None }
    }
}

impl<P> PanelSlot<P> {
    pub fn is_open(&self) -> bool {
        self.panel.is_some()
    }

    /// Creates the panel if there is none, otherwise brings the existing one to the front.
    /// Afterwards, the panel displays `content`.
    pub fn show<H: PreviewHost<Panel = P>>(&mut self, host: &mut H, content: &str) {
        if let Some(panel) = self.panel.as_mut() {
            host.reveal_panel(panel);
        } else {
            self.panel = Some(host.create_panel());
        }
        if let Some(panel) = self.panel.as_mut() {
            host.set_panel_content(panel, content);
        }
    }

    /// Replaces the content without revealing the panel. Returns `false` if no panel is open.
    pub fn update<H: PreviewHost<Panel = P>>(&mut self, host: &mut H, content: &str) -> bool {
        match self.panel.as_mut() {
            Some(panel) => {
                host.set_panel_content(panel, content);
                true
            }
            None => false,
        }
    }

    pub fn dispose<H: PreviewHost<Panel = P>>(&mut self, host: &mut H) {
        if let Some(panel) = self.panel.take() {
            host.dispose_panel(panel);
        }
    }
}

/// Live refresh mode. While enabled, exactly one document is watched through exactly one
/// subscription.
#[derive(Debug)]
pub struct LivePreview<D, S> {
    enabled: bool,
    watched: Option<D>,
    subscription: Option<S>,
}

impl<D, S> Default for LivePreview<D, S> {
    fn default() -> Self {
        Self {
            enabled: false,
            watched: None,
            subscription: None,
        }
    }
}

impl<D: Clone + PartialEq + Debug, S> LivePreview<D, S> {
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn watched(&self) -> Option<&D> {
        self.watched.as_ref()
    }

    pub fn is_watching(&self, document: &D) -> bool {
        self.enabled && self.watched.as_ref() == Some(document)
    }

    /// Starts watching `document`. A previously watched document is released first.
    pub fn enable<H>(&mut self, host: &mut H, document: D)
    where
        H: PreviewHost<DocumentId = D, Subscription = S>,
    {
        if self.is_watching(&document) {
            return;
        }
        self.disable(host);
        log::debug!("live preview of {document:?}");
        self.subscription = Some(host.subscribe(&document));
        self.watched = Some(document);
        self.enabled = true;
    }

    pub fn disable<H>(&mut self, host: &mut H)
    where
        H: PreviewHost<DocumentId = D, Subscription = S>,
    {
        if let Some(subscription) = self.subscription.take() {
            host.unsubscribe(subscription);
        }
        self.watched = None;
        self.enabled = false;
    }

    /// Returns the new state.
    pub fn toggle<H>(&mut self, host: &mut H, document: D) -> bool
    where
        H: PreviewHost<DocumentId = D, Subscription = S>,
    {
        if self.enabled {
            self.disable(host);
        } else {
            self.enable(host, document);
        }
        self.enabled
    }
}

/// Combines the panel and the live refresh mode. The host forwards editor commands and
/// document change notifications to this controller.
pub struct PreviewController<H: PreviewHost> {
    panel: PanelSlot<H::Panel>,
    live: LivePreview<H::DocumentId, H::Subscription>,
    options: RenderOptions,
}

impl<H: PreviewHost> Default for PreviewController<H> {
    fn default() -> Self {
        Self::new(RenderOptions::default())
    }
}

impl<H: PreviewHost> PreviewController<H> {
    pub fn new(options: RenderOptions) -> Self {
        Self {
            panel: PanelSlot::default(),
            live: LivePreview::default(),
            options,
        }
    }

    pub fn is_panel_open(&self) -> bool {
        self.panel.is_open()
    }

    pub fn is_live(&self) -> bool {
        self.live.is_enabled()
    }

    pub fn watched(&self) -> Option<&H::DocumentId> {
        self.live.watched()
    }

    /// Renders `text` and shows the result in the panel. If `text` cannot be decoded, the
    /// error is reported to the host and the panel is left untouched.
    pub fn show(&mut self, host: &mut H, text: &str) -> bool {
        match convert_str_with_options(text, &self.options) {
            Ok(rendered) => {
                self.panel.show(host, &rendered);
                true
            }
            Err(e) => {
                log::warn!("{e}");
                host.show_error(&e);
                false
            }
        }
    }

    /// Switches live refresh on or off for `document`. Turning it on also shows the
    /// current content of `document`. Returns whether live refresh is now enabled.
    pub fn toggle_live(&mut self, host: &mut H, document: H::DocumentId, text: &str) -> bool {
        let enabled = self.live.toggle(host, document);
        if enabled {
            self.show(host, text);
        }
        enabled
    }

    /// Called by the host whenever a document changes. Only the watched document triggers
    /// a refresh. Text that cannot be decoded, e.g., while the user is typing, keeps the last
    /// good rendering on screen. If live refresh started on undecodable text, there is no
    /// panel yet and the first good rendering opens it.
    pub fn document_changed(&mut self, host: &mut H, document: &H::DocumentId, text: &str) -> bool {
        if !self.live.is_watching(document) {
            return false;
        }
        match convert_str_with_options(text, &self.options) {
            Ok(rendered) => {
                if !self.panel.update(host, &rendered) {
                    self.panel.show(host, &rendered);
                }
                true
            }
            Err(e) => {
                log::debug!("skipping refresh of {document:?}: {e}");
                false
            }
        }
    }

    /// Closes the panel. Live refresh has nothing to show without it and is disabled too.
    pub fn dispose(&mut self, host: &mut H) {
        self.live.disable(host);
        self.panel.dispose(host);
    }
}
