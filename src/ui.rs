//! Configurator side panel.
//!
//! The panel only reads the session and reports what the customer touched as
//! [`PanelAction`]s; [`apply_actions`] feeds them back into the session so the
//! whole round trip can be exercised without a window.

use crate::configurator::ConfiguratorSession;
use crate::math::{Rgb, PALETTE};
use crate::quote::{ContactDetails, QuoteRequest};
use crate::types::{FurnitureType, MaterialKind};

const PANEL_WIDTH: f32 = 260.0;
const SWATCH_SIZE: f32 = 28.0;

/// Something the customer changed in the panel this frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PanelAction {
    SetType(FurnitureType),
    SetWidth(f32),
    SetHeight(f32),
    SetDepth(f32),
    SetMaterial(MaterialKind),
    SetColor(Rgb),
    ResetView,
    RequestQuote,
}

/// Contact fields and the outcome of the last quote attempt
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QuoteForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub status: Option<String>,
}

impl QuoteForm {
    pub fn contact(&self) -> ContactDetails {
        ContactDetails::new(self.name.as_str(), self.email.as_str()).with_phone(self.phone.as_str())
    }
}

/// Draw the configurator panel and collect the actions taken
pub fn configurator_panel(
    ctx: &egui::Context,
    session: &ConfiguratorSession,
    form: &mut QuoteForm,
) -> Vec<PanelAction> {
    let mut actions = Vec::new();
    let input = *session.input();
    let profile = session.profile();

    egui::SidePanel::left("configurator")
        .resizable(false)
        .exact_width(PANEL_WIDTH)
        .show(ctx, |ui| {
            ui.heading("Configure your furniture");
            ui.separator();

            let mut furniture_type = input.furniture_type;
            egui::ComboBox::from_label("Type")
                .selected_text(furniture_type.label())
                .show_ui(ui, |ui| {
                    for candidate in FurnitureType::ALL {
                        ui.selectable_value(&mut furniture_type, candidate, candidate.label());
                    }
                });
            if furniture_type != input.furniture_type {
                actions.push(PanelAction::SetType(furniture_type));
            }

            ui.add_space(8.0);
            let dims = input.dimensions;
            let (mut width, mut height, mut depth) = (dims.width, dims.height, dims.depth);
            let sliders = [
                ("Width", &mut width, profile.width.min..=profile.width.max),
                ("Height", &mut height, profile.height.min..=profile.height.max),
                ("Depth", &mut depth, profile.depth.min..=profile.depth.max),
            ];
            for (label, value, range) in sliders {
                ui.add(egui::Slider::new(value, range).step_by(1.0).suffix(" cm").text(label));
            }
            if width != dims.width {
                actions.push(PanelAction::SetWidth(width));
            }
            if height != dims.height {
                actions.push(PanelAction::SetHeight(height));
            }
            if depth != dims.depth {
                actions.push(PanelAction::SetDepth(depth));
            }

            ui.add_space(8.0);
            ui.label("Material");
            ui.horizontal(|ui| {
                for material in MaterialKind::ALL {
                    let button = egui::Button::new(material.label()).selected(material == input.material);
                    if ui.add(button).clicked() {
                        actions.push(PanelAction::SetMaterial(material));
                    }
                }
            });

            ui.add_space(8.0);
            ui.label("Colour");
            ui.horizontal_wrapped(|ui| {
                for swatch in PALETTE {
                    let [r, g, b] = [swatch.color.r, swatch.color.g, swatch.color.b];
                    let button = egui::Button::new("")
                        .fill(egui::Color32::from_rgb(r, g, b))
                        .min_size(egui::vec2(SWATCH_SIZE, SWATCH_SIZE))
                        .selected(swatch.color == input.color);
                    if ui.add(button).on_hover_text(swatch.name).clicked() {
                        actions.push(PanelAction::SetColor(swatch.color));
                    }
                }
            });

            ui.separator();
            ui.label("Estimated price");
            ui.heading(session.configuration().price.to_string());
            ui.small(format!("{} parts", session.configuration().scene.leaf_count()));

            ui.separator();
            ui.label("Name");
            ui.text_edit_singleline(&mut form.name);
            ui.label("Email");
            ui.text_edit_singleline(&mut form.email);
            ui.label("Phone (optional)");
            ui.text_edit_singleline(&mut form.phone);

            ui.add_space(8.0);
            ui.horizontal(|ui| {
                if ui.button("Reset view").clicked() {
                    actions.push(PanelAction::ResetView);
                }
                if ui.button("Request quote").clicked() {
                    actions.push(PanelAction::RequestQuote);
                }
            });
            if let Some(status) = &form.status {
                ui.label(status.as_str());
            }
        });

    actions
}

/// Apply panel actions to the session; returns the quote request if one was made
pub fn apply_actions(
    session: &mut ConfiguratorSession,
    form: &mut QuoteForm,
    actions: impl IntoIterator<Item = PanelAction>,
) -> Option<QuoteRequest> {
    let mut quote = None;
    for action in actions {
        match action {
            PanelAction::SetType(furniture_type) => session.set_furniture_type(furniture_type),
            PanelAction::SetWidth(width) => session.set_width(width),
            PanelAction::SetHeight(height) => session.set_height(height),
            PanelAction::SetDepth(depth) => session.set_depth(depth),
            PanelAction::SetMaterial(material) => session.set_material(material),
            PanelAction::SetColor(color) => session.set_color(color),
            PanelAction::ResetView => session.reset_view(),
            PanelAction::RequestQuote => match session.quote_request(form.contact()) {
                Ok(request) => {
                    log::info!("Quote requested by {}", request.customer_email);
                    form.status = Some(format!("Quote requested: {}", session.configuration().price));
                    quote = Some(request);
                }
                Err(err) => {
                    log::warn!("Quote rejected: {err}");
                    form.status = Some(err.to_string());
                }
            },
        }
    }
    quote
}
