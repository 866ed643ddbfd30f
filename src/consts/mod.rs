// Runtime constant selection
//
// Linked section/method dropdowns for browsing chain constants. Changing
// the method keeps the current section.

use crate::chain::ChainConsts;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ConstValueBase {
    pub section: String,
    pub method: String,
}

/// Map a picked method onto the current section
pub fn transform(value: &ConstValueBase) -> impl Fn(&str) -> ConstValueBase + '_ {
    move |method: &str| ConstValueBase {
        method: method.to_string(),
        section: value.section.clone(),
    }
}

/// Method dropdown for one section
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectKey {
    options: Vec<String>,
    selected: usize,
}

impl SelectKey {
    /// `None` when there is nothing to choose from
    pub fn new(options: Vec<String>, value: &ConstValueBase) -> Option<Self> {
        if options.is_empty() {
            return None;
        }

        let selected = options
            .iter()
            .position(|o| *o == value.method)
            .unwrap_or(0);

        Some(Self { options, selected })
    }

    pub fn options(&self) -> &[String] {
        &self.options
    }

    pub fn selected_index(&self) -> usize {
        self.selected
    }

    pub fn select_next(&mut self, value: &ConstValueBase) -> ConstValueBase {
        self.selected = (self.selected + 1) % self.options.len();
        transform(value)(&self.options[self.selected])
    }

    pub fn select_prev(&mut self, value: &ConstValueBase) -> ConstValueBase {
        self.selected = self
            .selected
            .checked_sub(1)
            .unwrap_or(self.options.len() - 1);
        transform(value)(&self.options[self.selected])
    }
}

/// Section and method pickers over the snapshot's constant table
#[derive(Debug, Clone, Default)]
pub struct ConstBrowser {
    pub value: ConstValueBase,
    pub methods: Option<SelectKey>,
}

impl ConstBrowser {
    pub fn new(consts: &ChainConsts) -> Self {
        let mut browser = Self::default();
        if let Some(section) = consts.all.keys().next() {
            browser.set_section(consts, section.clone());
        }
        browser
    }

    /// Keep the current selection if it still exists in a refreshed table
    pub fn refresh(&mut self, consts: &ChainConsts) {
        if consts.all.contains_key(&self.value.section) {
            let section = self.value.section.clone();
            let method = self.value.method.clone();
            self.set_section(consts, section);
            if let Some(methods) = self.methods.as_mut() {
                if let Some(idx) = methods.options.iter().position(|m| *m == method) {
                    methods.selected = idx;
                    self.value.method = method;
                }
            }
        } else {
            *self = Self::new(consts);
        }
    }

    fn set_section(&mut self, consts: &ChainConsts, section: String) {
        let options: Vec<String> = consts
            .all
            .get(&section)
            .map(|m| m.keys().cloned().collect())
            .unwrap_or_default();

        self.value = ConstValueBase {
            method: options.first().cloned().unwrap_or_default(),
            section,
        };
        self.methods = SelectKey::new(options, &self.value);
    }

    pub fn next_section(&mut self, consts: &ChainConsts) {
        self.step_section(consts, true);
    }

    pub fn prev_section(&mut self, consts: &ChainConsts) {
        self.step_section(consts, false);
    }

    fn step_section(&mut self, consts: &ChainConsts, forward: bool) {
        let sections: Vec<&String> = consts.all.keys().collect();
        if sections.is_empty() {
            return;
        }

        let current = sections
            .iter()
            .position(|s| **s == self.value.section)
            .unwrap_or(0);
        let next = if forward {
            (current + 1) % sections.len()
        } else {
            current.checked_sub(1).unwrap_or(sections.len() - 1)
        };
        self.set_section(consts, sections[next].clone());
    }

    pub fn next_method(&mut self) {
        if let Some(methods) = self.methods.as_mut() {
            self.value = methods.select_next(&self.value);
        }
    }

    pub fn prev_method(&mut self) {
        if let Some(methods) = self.methods.as_mut() {
            self.value = methods.select_prev(&self.value);
        }
    }

    /// Display value of the selected constant
    pub fn current<'a>(&self, consts: &'a ChainConsts) -> Option<&'a str> {
        consts
            .all
            .get(&self.value.section)
            .and_then(|m| m.get(&self.value.method))
            .map(String::as_str)
    }
}
