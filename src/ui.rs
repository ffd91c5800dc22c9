//! UI layer
//! -----------------------
//! Main window (top to bottom):
//!   • Welcome heading
//!   • Mascot picture
//!   • Prompt line
//!   • Protein / Veggies buttons (open a selector dialog)
//!   • Find Recipe / Exit buttons
//!
//! Floating windows:
//!   • Selector dialog: picture, multi-select list, Save / Back
//!   • Notice: title, message, OK
//!   • One window per found recipe
//!
//! All state lives in the `KitchenSession`; this layer only draws it and
//! forwards clicks.

use eframe::egui;
use egui::{Align2, Context, RichText, TextureHandle, TextureOptions, Vec2};

use crate::assets::{Assets, DecodedImage};
use crate::kitchen::{IngredientKind, KitchenSession};

const WELCOME: &str = "Welcome to GranRecipes!";
const PROMPT: &str = "Let Ol' Gran help you out here. What's left over in the kitchen?";

/// Main egui app.
pub struct GranRecipes {
    session: KitchenSession,

    // Textures uploaded once from the decoded assets.
    mascot_texture: TextureHandle,
    protein_texture: TextureHandle,
    veggies_texture: TextureHandle,
}

/// What the user clicked inside the selector dialog this frame.
enum SelectorAction {
    Toggle(usize),
    Save,
    Back,
}

impl GranRecipes {
    pub fn new(cc: &eframe::CreationContext<'_>, session: KitchenSession, assets: Assets) -> Self {
        let ctx = &cc.egui_ctx;
        let upload = |name: &str, image: &DecodedImage| {
            ctx.load_texture(name, image.to_color_image(), TextureOptions::LINEAR)
        };

        Self {
            mascot_texture: upload("mascot", &assets.mascot),
            protein_texture: upload("protein", &assets.protein),
            veggies_texture: upload("veggies", &assets.veggies),
            session,
        }
    }

    fn selector_texture(&self, kind: IngredientKind) -> &TextureHandle {
        match kind {
            IngredientKind::Protein => &self.protein_texture,
            IngredientKind::Veggie => &self.veggies_texture,
        }
    }

    // -----------------------------
    // Main window
    // -----------------------------

    fn main_panel(&mut self, ctx: &Context, ui: &mut egui::Ui) {
        ui.vertical_centered(|ui| {
            ui.add_space(10.0);
            ui.label(RichText::new(WELCOME).size(16.0).strong());
            ui.add_space(10.0);

            let [w, h] = self.mascot_texture.size();
            ui.add(egui::Image::new(&self.mascot_texture).fit_to_exact_size(Vec2::new(w as f32, h as f32)));

            ui.add_space(5.0);
            ui.label(RichText::new(PROMPT).size(10.0));
            ui.add_space(5.0);

            // Dialogs are modal: the main buttons stay greyed out until closed.
            let enabled = !self.session.is_modal();
            ui.add_enabled_ui(enabled, |ui| {
                for kind in IngredientKind::ALL {
                    if ui.button(kind.button_label()).clicked() {
                        self.session.open_selector(kind);
                    }
                    let picked = self.session.selection().get(kind);
                    if !picked.is_empty() {
                        ui.small(picked.join(", "));
                    }
                    ui.add_space(5.0);
                }

                ui.add_space(5.0);
                if ui.button("Find Recipe").clicked() {
                    self.session.find_recipe();
                }
                ui.add_space(10.0);
                if ui.button("Exit").clicked() {
                    ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                }
            });
        });
    }

    // -----------------------------
    // Floating windows
    // -----------------------------

    fn selector_window(&mut self, ctx: &Context) {
        let Some(selector) = self.session.selector() else {
            return;
        };
        let kind = selector.kind();
        let entries: Vec<(&'static str, bool)> = selector.entries().collect();
        let texture = self.selector_texture(kind);

        let mut open = true;
        let mut action = None;
        egui::Window::new(kind.dialog_title())
            .id(egui::Id::new("ingredient_selector"))
            .open(&mut open)
            .collapsible(false)
            .resizable(false)
            .anchor(Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.vertical_centered(|ui| {
                    let [w, h] = texture.size();
                    ui.add(egui::Image::new(texture).fit_to_exact_size(Vec2::new(w as f32, h as f32)));
                    ui.add_space(10.0);

                    for (index, (name, ticked)) in entries.iter().enumerate() {
                        if ui.selectable_label(*ticked, *name).clicked() {
                            action = Some(SelectorAction::Toggle(index));
                        }
                    }

                    ui.add_space(8.0);
                    if ui.button("Save").clicked() {
                        action = Some(SelectorAction::Save);
                    }
                    if ui.button("Back").clicked() {
                        action = Some(SelectorAction::Back);
                    }
                });
            });

        match action {
            Some(SelectorAction::Toggle(index)) => self.session.toggle_candidate(index),
            Some(SelectorAction::Save) => self.session.save_selector(),
            Some(SelectorAction::Back) => self.session.close_selector(),
            None if !open => self.session.close_selector(),
            None => {}
        }
    }

    fn notice_window(&mut self, ctx: &Context) {
        let Some(notice) = self.session.notice() else {
            return;
        };

        let mut dismissed = false;
        let mut open = true;
        egui::Window::new(notice.title.as_str())
            .id(egui::Id::new("notice"))
            .open(&mut open)
            .collapsible(false)
            .resizable(false)
            .anchor(Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.vertical_centered(|ui| {
                    ui.label(notice.body.as_str());
                    ui.add_space(8.0);
                    if ui.button("OK").clicked() {
                        dismissed = true;
                    }
                });
            });

        if dismissed || !open {
            self.session.dismiss_notice();
        }
    }

    fn recipe_windows(&mut self, ctx: &Context) {
        let mut closed = Vec::new();
        for window in self.session.recipe_windows() {
            let mut open = true;
            egui::Window::new(window.card.title())
                .id(egui::Id::new(("recipe", window.id)))
                .open(&mut open)
                .resizable(false)
                .show(ctx, |ui| {
                    for line in window.card.lines() {
                        ui.label(line.as_str());
                    }
                });
            if !open {
                closed.push(window.id);
            }
        }
        for id in closed {
            self.session.close_recipe_window(id);
        }
    }
}

impl eframe::App for GranRecipes {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                self.main_panel(ctx, ui);
            });
        });

        self.recipe_windows(ctx);
        self.selector_window(ctx);
        self.notice_window(ctx);
    }
}
