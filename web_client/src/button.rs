use strum::{Display, EnumString};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum ButtonSize {
    Xs,
    Sm,
    #[default]
    Md,
    Lg,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum ButtonVariant {
    #[default]
    Solid,
    Outline,
    Ghost,
    Link,
}

/// Presentation passed straight through to the rendered control
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ButtonProps {
    pub class_name: Option<String>,
    pub size: ButtonSize,
    pub variant: ButtonVariant,
    pub disabled: bool,
}

/// A button that asks for references. It holds no state of its own; clicking
/// it runs whatever the caller handed in.
pub struct ReferencesButton<H> {
    props: ButtonProps,
    on_click: H,
}

impl<H: Fn()> ReferencesButton<H> {
    pub fn new(props: ButtonProps, on_click: H) -> Self {
        Self { props, on_click }
    }

    pub fn props(&self) -> &ButtonProps {
        &self.props
    }

    pub fn click(&self) {
        (self.on_click)()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn click_invokes_the_handler() {
        let clicks = Cell::new(0);
        let button =
            ReferencesButton::new(ButtonProps::default(), || clicks.set(clicks.get() + 1));

        button.click();
        button.click();

        assert_eq!(clicks.get(), 2);
    }

    #[test]
    fn props_pass_through_unchanged() {
        let props = ButtonProps {
            class_name: Some("mt-2 w-full".to_string()),
            size: ButtonSize::Sm,
            variant: ButtonVariant::Outline,
            disabled: true,
        };
        let button = ReferencesButton::new(props.clone(), || {});

        assert_eq!(button.props(), &props);
        assert_eq!(button.props().size.to_string(), "sm");
        assert_eq!("ghost".parse::<ButtonVariant>().unwrap(), ButtonVariant::Ghost);
    }
}
