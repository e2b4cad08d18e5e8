//! Group List View
//!
//! Renders the group list, the search box, the banners and the popups.
//! Clicks are collected while the list is drawn and applied afterwards, so
//! the list being iterated is never mutated mid-frame.

use eframe::egui::{self, RichText};

use super::state::{GroupListState, InputKind, LoadStatus, PendingIntent};
use crate::egui_app::theme::{colors, styles};
use crate::shared::format::format_date;
use crate::shared::groups::{Group, MembershipField};

/// Actions from the group list
enum GroupAction {
    OpenInput(Group, InputKind),
    RequestDelete {
        group_id: String,
        field: MembershipField,
        value: String,
    },
    SelectMember(String),
}

/// Render the whole view into the central panel
pub fn render(ctx: &egui::Context, state: &mut GroupListState) {
    egui::CentralPanel::default().show(ctx, |ui| {
        ui.heading(RichText::new("Groups").color(colors::HEADING));
        ui.add_space(8.0);

        match state.load_status {
            LoadStatus::NotStarted | LoadStatus::Loading => {
                ui.horizontal(|ui| {
                    ui.spinner();
                    ui.label("Loading...");
                });
                return;
            }
            LoadStatus::Failed => {
                let message = state.error.clone().unwrap_or_default();
                ui.colored_label(colors::ERROR, format!("Error: {}", message));
                return;
            }
            LoadStatus::Loaded => {}
        }

        render_search(ui, state);
        render_banners(ui, state);

        let mut action = None;
        egui::ScrollArea::vertical().show(ui, |ui| {
            if state.filtered_groups.is_empty() {
                ui.colored_label(colors::TEXT_SECONDARY, "No groups found");
            }
            for group in &state.filtered_groups {
                if let Some(a) = render_group(ui, group, state) {
                    action = Some(a);
                }
                ui.add_space(8.0);
            }

            if state.selected_member.is_some() {
                render_posts(ui, state);
            }
        });

        if let Some(action) = action {
            process_action(action, state);
        }
    });

    render_popup(ctx, state);
}

fn render_search(ui: &mut egui::Ui, state: &mut GroupListState) {
    let mut query = state.search_query.clone();
    ui.horizontal(|ui| {
        ui.label("🔍");
        ui.add(
            egui::TextEdit::singleline(&mut query)
                .hint_text("Search groups...")
                .desired_width(ui.available_width() - 40.0),
        );
        if !query.is_empty() && ui.button("✕").clicked() {
            query.clear();
        }
    });
    if query != state.search_query {
        state.search(&query);
    }
    ui.add_space(8.0);
}

fn render_banners(ui: &mut egui::Ui, state: &mut GroupListState) {
    if let Some(message) = state.success_message.clone() {
        let mut dismiss = false;
        styles::success_frame().show(ui, |ui| {
            ui.horizontal(|ui| {
                ui.colored_label(colors::SUCCESS_TEXT, &message);
                dismiss = ui.small_button("✕").clicked();
            });
        });
        if dismiss {
            state.success_message = None;
        }
        ui.add_space(6.0);
    }

    if let Some(message) = state.error.clone() {
        let mut dismiss = false;
        styles::error_frame().show(ui, |ui| {
            ui.horizontal(|ui| {
                ui.colored_label(colors::ERROR, format!("Error: {}", message));
                dismiss = ui.small_button("✕").clicked();
            });
        });
        if dismiss {
            state.error = None;
        }
        ui.add_space(6.0);
    }
}

/// Render one group box - returns action if a button was clicked
fn render_group(
    ui: &mut egui::Ui,
    group: &Group,
    state: &GroupListState,
) -> Option<GroupAction> {
    let caps = state.capabilities;
    let mut action = None;

    styles::group_box_frame().show(ui, |ui| {
        ui.set_min_width(ui.available_width());
        ui.label(RichText::new(format!("Name: {}", group.name)).strong().color(colors::HEADING));
        ui.colored_label(
            colors::TEXT_SECONDARY,
            format!("Created: {}", format_date(group.created.as_deref())),
        );
        ui.add_space(4.0);

        ui.label(RichText::new("Users:").strong());
        if group.users.is_empty() {
            ui.colored_label(colors::TEXT_SECONDARY, "No users");
        }
        for user in &group.users {
            ui.horizontal(|ui| {
                ui.label(user);
                if caps.delete_user && ui.add(styles::danger_button("Remove")).clicked() {
                    action = Some(GroupAction::RequestDelete {
                        group_id: group.id.clone(),
                        field: MembershipField::Users,
                        value: user.clone(),
                    });
                }
            });
        }

        ui.add_space(4.0);
        ui.label(RichText::new("Members:").strong());
        if group.members.is_empty() {
            ui.colored_label(colors::TEXT_SECONDARY, "No members");
        }
        for member in &group.members {
            ui.horizontal(|ui| {
                let selected = state.selected_member.as_deref() == Some(member.as_str());
                if ui.selectable_label(selected, member).clicked() && caps.member_posts {
                    action = Some(GroupAction::SelectMember(member.clone()));
                }
                if caps.delete_member && ui.add(styles::danger_button("Remove")).clicked() {
                    action = Some(GroupAction::RequestDelete {
                        group_id: group.id.clone(),
                        field: MembershipField::Members,
                        value: member.clone(),
                    });
                }
            });
        }

        ui.add_space(8.0);
        ui.horizontal(|ui| {
            if ui.add(styles::primary_button("Input")).clicked() {
                action = Some(GroupAction::OpenInput(group.clone(), InputKind::Note));
            }
            if caps.add_member && ui.add(styles::primary_button("Add Member")).clicked() {
                action = Some(GroupAction::OpenInput(group.clone(), InputKind::AddMember));
            }
            if caps.add_permission && ui.add(styles::primary_button("Add Permission")).clicked() {
                action = Some(GroupAction::OpenInput(group.clone(), InputKind::AddPermission));
            }
        });
    });

    action
}

fn render_posts(ui: &mut egui::Ui, state: &mut GroupListState) {
    let Some(member) = state.selected_member.clone() else {
        return;
    };
    let mut close = false;

    ui.add_space(8.0);
    styles::group_box_frame().show(ui, |ui| {
        ui.set_min_width(ui.available_width());
        ui.horizontal(|ui| {
            ui.label(RichText::new(format!("Posts by {}", member)).strong().color(colors::HEADING));
            close = ui.small_button("✕").clicked();
        });

        match state.selected_posts() {
            None if state.is_busy() => {
                ui.spinner();
            }
            None => {
                ui.colored_label(colors::TEXT_SECONDARY, "No posts");
            }
            Some(posts) if posts.is_empty() => {
                ui.colored_label(colors::TEXT_SECONDARY, "No posts");
            }
            Some(posts) => {
                for post in posts {
                    ui.label(format!("{}: {}", post.id, post.category_label()));
                }
            }
        }
    });

    if close {
        state.selected_member = None;
    }
}

fn render_popup(ctx: &egui::Context, state: &mut GroupListState) {
    match state.intent.clone() {
        Some(PendingIntent::Input { group_name, kind, .. }) => {
            let mut submit = false;
            let mut cancel = false;
            egui::Window::new(format!("{} {}", kind.title(), group_name))
                .collapsible(false)
                .resizable(false)
                .frame(styles::popup_frame())
                .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
                .show(ctx, |ui| {
                    let response = ui.text_edit_singleline(&mut state.input_value);
                    response.request_focus();
                    if response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                        submit = true;
                    }
                    ui.add_space(8.0);
                    ui.horizontal(|ui| {
                        submit |= ui.add(styles::primary_button("Submit")).clicked();
                        cancel = ui.button("Cancel").clicked();
                    });
                });
            if cancel {
                state.cancel();
            } else if submit {
                state.confirm_input();
            }
        }
        Some(PendingIntent::ConfirmDelete { field, value, .. }) => {
            let mut confirm = false;
            let mut cancel = false;
            egui::Window::new("Confirm removal")
                .collapsible(false)
                .resizable(false)
                .frame(styles::popup_frame())
                .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
                .show(ctx, |ui| {
                    ui.label(format!(
                        "Are you sure you want to remove {} from {}?",
                        value,
                        field.as_str()
                    ));
                    ui.add_space(8.0);
                    ui.horizontal(|ui| {
                        confirm = ui.add(styles::danger_button("Yes")).clicked();
                        cancel = ui.button("No").clicked();
                    });
                });
            if cancel {
                state.cancel();
            } else if confirm {
                state.confirm_delete();
            }
        }
        None => {}
    }
}

/// Process a group list action
fn process_action(action: GroupAction, state: &mut GroupListState) {
    match action {
        GroupAction::OpenInput(group, kind) => state.open_input(&group, kind),
        GroupAction::RequestDelete { group_id, field, value } => match field {
            MembershipField::Users => state.request_delete_user(&group_id, &value),
            MembershipField::Members => state.request_delete_member(&group_id, &value),
        },
        GroupAction::SelectMember(member) => state.select_member(&member),
    }
}
