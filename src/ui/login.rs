use eframe::egui::{Color32, Key, RichText, TextEdit, Ui};

use crate::auth::SessionGuard;

// ---------------------------------------------------------------------------
// Login screen
// ---------------------------------------------------------------------------

/// Text typed into the login form.
#[derive(Debug, Default)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
    pub error: Option<String>,
}

impl LoginForm {
    /// Check the typed credentials exactly as entered. Returns whether the
    /// user is now signed in.
    pub fn submit(&mut self, guard: &mut SessionGuard) -> bool {
        if guard.authenticate(&self.username, &self.password) {
            *self = LoginForm::default();
            true
        } else {
            self.password.clear();
            self.error = Some("Invalid username or password".to_string());
            false
        }
    }
}

/// Render the login form; a successful attempt flips the guard.
pub fn login_panel(ui: &mut Ui, form: &mut LoginForm, guard: &mut SessionGuard) {
    ui.vertical_centered(|ui: &mut Ui| {
        ui.add_space(80.0);
        ui.heading("Login to Medicine Dashboard");
        ui.add_space(12.0);

        ui.add(
            TextEdit::singleline(&mut form.username)
                .hint_text("Username")
                .desired_width(240.0),
        );
        let password = ui.add(
            TextEdit::singleline(&mut form.password)
                .password(true)
                .hint_text("Password")
                .desired_width(240.0),
        );
        ui.add_space(8.0);

        let enter = password.lost_focus() && ui.input(|i| i.key_pressed(Key::Enter));
        if ui.button("Login").clicked() || enter {
            form.submit(guard);
        }

        if let Some(err) = &form.error {
            ui.add_space(8.0);
            ui.colored_label(Color32::RED, err);
        }
    });
}

/// Greeting shown after a successful sign-in.
pub fn welcome_label(ui: &mut Ui, guard: &SessionGuard) {
    let text = RichText::new(format!("Welcome {}!", guard.username()));
    ui.label(text.color(Color32::DARK_GREEN));
}
