#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

impl ToastKind {
    pub fn class_name(self) -> &'static str {
        match self {
            ToastKind::Success => "notification notification-success",
            ToastKind::Error => "notification notification-error",
        }
    }

    pub fn background(self) -> &'static str {
        match self {
            ToastKind::Success => "#10b981",
            ToastKind::Error => "#ef4444",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            ToastKind::Success => "✅",
            ToastKind::Error => "❌",
        }
    }
}

/// Result of a contact form submission.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    Sent,
    Failed(String),
}

impl SubmitOutcome {
    pub fn toast(&self) -> (ToastKind, &'static str) {
        match self {
            SubmitOutcome::Sent => (
                ToastKind::Success,
                "Votre message a été envoyé avec succès !",
            ),
            SubmitOutcome::Failed(_) => (
                ToastKind::Error,
                "Une erreur s'est produite. Veuillez réessayer.",
            ),
        }
    }
}

/// Minimal HTML escaping for text placed into toast and modal markup.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
