use crate::api::{ApiError, Role};

pub const CONNECTION_FAILED: &str = "Connection failed. Make sure the backend is running.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthMode {
    #[default]
    Login,
    Signup,
}

impl AuthMode {
    pub fn toggled(&self) -> Self {
        match self {
            AuthMode::Login => AuthMode::Signup,
            AuthMode::Signup => AuthMode::Login,
        }
    }

    pub fn success_text(&self) -> &'static str {
        match self {
            AuthMode::Login => "Login successful! Redirecting...",
            AuthMode::Signup => "Account created! Redirecting...",
        }
    }

    pub fn submit_label(&self) -> &'static str {
        match self {
            AuthMode::Login => "Sign In",
            AuthMode::Signup => "Create Account",
        }
    }

    pub fn switch_prompt(&self) -> (&'static str, &'static str) {
        match self {
            AuthMode::Login => ("Don't have an account?", "Sign up"),
            AuthMode::Signup => ("Already have an account?", "Sign in"),
        }
    }
}

pub const ROLE_TABS: [Role; 3] = [Role::Admin, Role::Employee, Role::Auditor];

pub struct FeatureCard {
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
}

pub const FEATURE_CARDS: [FeatureCard; 3] = [
    FeatureCard {
        title: "Smart Receipt Scanning",
        description: "AI-powered OCR extracts data from receipts automatically",
        icon: "fa-receipt",
    },
    FeatureCard {
        title: "Real-time Fraud Detection",
        description: "Advanced algorithms identify anomalies and suspicious patterns",
        icon: "fa-chart-line",
    },
    FeatureCard {
        title: "Automated Verification",
        description: "Instant validation and categorization of all expenses",
        icon: "fa-circle-check",
    },
];

pub fn validate_credentials(
    mode: AuthMode,
    email: &str,
    password: &str,
    username: &str,
) -> Result<(), String> {
    if email.trim().is_empty() {
        return Err("Please enter your email".into());
    }
    if password.is_empty() {
        return Err("Please enter your password".into());
    }
    if mode == AuthMode::Signup && username.trim().is_empty() {
        return Err("Please choose a username".into());
    }
    Ok(())
}

/// Message shown for a failed login or signup.
pub fn failure_text(error: &ApiError) -> String {
    if error.is_network() {
        CONNECTION_FAILED.to_string()
    } else if error.code == "DECODE_ERROR" {
        crate::api::auth::AUTH_FAILED.to_string()
    } else {
        error.error.clone()
    }
}
