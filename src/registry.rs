//
// Copyright 2022-Present (c) Raja Lehtihet & Wael El Oraiby
//
// Redistribution and use in source and binary forms, with or without
// modification, are permitted provided that the following conditions are met:
//
// 1. Redistributions of source code must retain the above copyright notice,
// this list of conditions and the following disclaimer.
//
// 2. Redistributions in binary form must reproduce the above copyright notice,
// this list of conditions and the following disclaimer in the documentation
// and/or other materials provided with the distribution.
//
// 3. Neither the name of the copyright holder nor the names of its contributors
// may be used to endorse or promote products derived from this software without
// specific prior written permission.
//
// THIS SOFTWARE IS PROVIDED BY THE COPYRIGHT HOLDERS AND CONTRIBUTORS "AS IS"
// AND ANY EXPRESS OR IMPLIED WARRANTIES, INCLUDING, BUT NOT LIMITED TO, THE
// IMPLIED WARRANTIES OF MERCHANTABILITY AND FITNESS FOR A PARTICULAR PURPOSE
// ARE DISCLAIMED. IN NO EVENT SHALL THE COPYRIGHT HOLDER OR CONTRIBUTORS BE
// LIABLE FOR ANY DIRECT, INDIRECT, INCIDENTAL, SPECIAL, EXEMPLARY, OR
// CONSEQUENTIAL DAMAGES (INCLUDING, BUT NOT LIMITED TO, PROCUREMENT OF
// SUBSTITUTE GOODS OR SERVICES; LOSS OF USE, DATA, OR PROFITS; OR BUSINESS
// INTERRUPTION) HOWEVER CAUSED AND ON ANY THEORY OF LIABILITY, WHETHER IN
// CONTRACT, STRICT LIABILITY, OR TORT (INCLUDING NEGLIGENCE OR OTHERWISE)
// ARISING IN ANY WAY OUT OF THE USE OF THIS SOFTWARE, EVEN IF ADVISED OF THE
// POSSIBILITY OF SUCH DAMAGE.
//
use std::collections::HashMap;

use super::*;

/// A widget packaged as an object, so it can be created by name at runtime.
pub trait Component {
    /// Name the component was registered under.
    fn name(&self) -> &str;
    /// Draws the component for the current frame.
    fn render(&mut self, ctx: &mut Context, opts: &Options) -> ResourceState;
    /// Identifier of the persistent state the component owns, if any.
    fn state_id(&self) -> Option<Id> { None }
    /// Offers the input of the frame before rendering. Returns `true` when consumed.
    fn handle_input(&mut self, _input: &InputState) -> bool { false }
}

/// Built-in widgets as components. Each variant owns the value its widget edits.
#[derive(Clone, Debug, PartialEq)]
pub enum Builtin {
    /// Static text.
    Label(String),
    /// Push button.
    Button(String),
    /// Check box and its value.
    Checkbox(String, bool),
    /// Slider and its value.
    Slider(String, f32),
    /// Text field and its contents.
    TextInput(String, String),
    /// Horizontal rule.
    Separator,
}

impl Component for Builtin {
    fn name(&self) -> &str {
        match self {
            Builtin::Label(_) => "label",
            Builtin::Button(_) => "button",
            Builtin::Checkbox(..) => "checkbox",
            Builtin::Slider(..) => "slider",
            Builtin::TextInput(..) => "text_input",
            Builtin::Separator => "separator",
        }
    }

    fn render(&mut self, ctx: &mut Context, opts: &Options) -> ResourceState {
        match self {
            Builtin::Label(text) => {
                ctx.label(text, opts);
                ResourceState::NONE
            }
            Builtin::Button(label) => ctx.button(label, opts),
            Builtin::Checkbox(label, value) => ctx.checkbox(label, value, opts),
            Builtin::Slider(label, value) => ctx.slider(label, value, opts),
            Builtin::TextInput(label, text) => ctx.text_input(label, text, opts),
            Builtin::Separator => {
                ctx.separator(opts);
                ResourceState::NONE
            }
        }
    }
}

type Factory = Box<dyn Fn() -> Box<dyn Component>>;

/// Name → factory table, filled during application setup.
#[derive(Default)]
pub struct ComponentRegistry {
    factories: HashMap<String, Factory>,
}

impl ComponentRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self { Self::default() }

    /// Creates a registry holding every [`Builtin`] under its component name.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        registry.register("label", || Box::new(Builtin::Label(String::from("label"))));
        registry.register("button", || Box::new(Builtin::Button(String::from("button"))));
        registry.register("checkbox", || Box::new(Builtin::Checkbox(String::from("checkbox"), false)));
        registry.register("slider", || Box::new(Builtin::Slider(String::from("slider"), 0.0)));
        registry.register("text_input", || Box::new(Builtin::TextInput(String::from("text_input"), String::new())));
        registry.register("separator", || Box::new(Builtin::Separator));
        registry
    }

    /// Registers `factory` under `name`. Returns `true` when it replaced an earlier entry.
    pub fn register<F>(&mut self, name: &str, factory: F) -> bool
    where
        F: Fn() -> Box<dyn Component> + 'static,
    {
        let replaced = self.factories.insert(name.to_string(), Box::new(factory)).is_some();
        if replaced {
            log::warn!("component {name:?} registered twice, keeping the latest factory");
        }
        replaced
    }

    /// Instantiates the component registered under `name`.
    pub fn create(&self, name: &str) -> Option<Box<dyn Component>> { self.factories.get(name).map(|factory| factory()) }

    /// Returns `true` if `name` is registered.
    pub fn contains(&self, name: &str) -> bool { self.factories.contains_key(name) }

    /// Registered names in alphabetical order.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.factories.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Number of registered components.
    pub fn len(&self) -> usize { self.factories.len() }

    /// Returns `true` when nothing is registered.
    pub fn is_empty(&self) -> bool { self.factories.is_empty() }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{pointer, run};

    struct Counter {
        frames: u32,
    }

    impl Component for Counter {
        fn name(&self) -> &str { "counter" }

        fn render(&mut self, ctx: &mut Context, opts: &Options) -> ResourceState {
            self.frames += 1;
            ctx.label(&format!("{}", self.frames), opts);
            ResourceState::CHANGE
        }
    }

    #[test]
    fn builtins_are_registered_by_name() {
        let registry = ComponentRegistry::with_builtins();
        assert_eq!(registry.names(), vec!["button", "checkbox", "label", "separator", "slider", "text_input"]);
        for name in registry.names() {
            assert_eq!(registry.create(name).map(|c| c.name().to_string()), Some(name.to_string()));
        }
        assert!(registry.create("missing").is_none());
        assert!(!registry.contains("missing"));
    }

    #[test]
    fn custom_components_render_through_the_trait() {
        let mut registry = ComponentRegistry::new();
        assert!(registry.is_empty());
        assert!(!registry.register("counter", || Box::new(Counter { frames: 0 })));
        assert!(registry.register("counter", || Box::new(Counter { frames: 10 })));
        assert_eq!(registry.len(), 1);

        let mut ctx = Context::new();
        let mut counter = registry.create("counter").expect("registered above");
        assert!(counter.state_id().is_none());
        let res = run(&mut ctx, InputSnapshot::default(), |ctx| counter.render(ctx, &Options::new()));
        assert!(res.is_changed());
        assert!(!ctx.draw_list().is_empty());
    }

    #[test]
    fn builtin_checkbox_keeps_its_value() {
        let mut checkbox = Builtin::Checkbox(String::from("agree"), false);
        let mut ctx = Context::new();
        for input in [pointer(5, 5, false), pointer(5, 5, true)] {
            run(&mut ctx, input, |ctx| checkbox.render(ctx, &Options::new()));
        }
        assert_eq!(checkbox, Builtin::Checkbox(String::from("agree"), true));
        assert!(!checkbox.handle_input(ctx.input()));
    }
}
