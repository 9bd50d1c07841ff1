use engine::Category;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExpenseField {
    Name,
    Amount,
}

/// Fields of the add-expense modal.
///
/// A form opened without a category follows [`Category::guess`] on the name
/// until the user picks one with the arrow keys.
#[derive(Debug, Clone)]
pub struct ExpenseForm {
    pub name: String,
    pub amount: String,
    pub category: Category,
    pub focus: ExpenseField,
    category_locked: bool,
}

impl Default for ExpenseForm {
    fn default() -> Self {
        Self::guessing()
    }
}

impl ExpenseForm {
    pub fn for_category(category: Category) -> Self {
        Self {
            name: String::new(),
            amount: String::new(),
            category,
            focus: ExpenseField::Name,
            category_locked: true,
        }
    }

    pub fn guessing() -> Self {
        Self {
            category_locked: false,
            ..Self::for_category(Category::guess(""))
        }
    }

    pub fn is_guessing(&self) -> bool {
        !self.category_locked
    }

    pub fn next_field(&mut self) {
        self.focus = match self.focus {
            ExpenseField::Name => ExpenseField::Amount,
            ExpenseField::Amount => ExpenseField::Name,
        };
    }

    pub fn push(&mut self, ch: char) {
        match self.focus {
            ExpenseField::Name => {
                self.name.push(ch);
                self.refresh_guess();
            }
            ExpenseField::Amount => self.amount.push(ch),
        }
    }

    pub fn push_str(&mut self, text: &str) {
        text.chars().filter(|ch| !ch.is_control()).for_each(|ch| self.push(ch));
    }

    pub fn pop(&mut self) {
        match self.focus {
            ExpenseField::Name => {
                self.name.pop();
                self.refresh_guess();
            }
            ExpenseField::Amount => {
                self.amount.pop();
            }
        }
    }

    pub fn next_category(&mut self) {
        self.category = self.category.next();
        self.category_locked = true;
    }

    pub fn prev_category(&mut self) {
        self.category = self.category.prev();
        self.category_locked = true;
    }

    fn refresh_guess(&mut self) {
        if !self.category_locked {
            self.category = Category::guess(&self.name);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn guess_follows_name_until_picked() {
        let mut form = ExpenseForm::guessing();
        form.push_str("Rent");
        assert_eq!(form.category, Category::Needs);

        form.push_str(" party");
        form.prev_category();
        let picked = form.category;
        form.push_str(" more");
        assert_eq!(form.category, picked);
        assert!(!form.is_guessing());
    }

    #[test]
    fn fixed_category_ignores_name() {
        let mut form = ExpenseForm::for_category(Category::Savings);
        form.push_str("Netflix");
        assert_eq!(form.category, Category::Savings);
    }

    #[test]
    fn typing_goes_to_focused_field() {
        let mut form = ExpenseForm::for_category(Category::Wants);
        form.push('A');
        form.next_field();
        form.push_str("12\t.5");
        form.pop();
        assert_eq!(form.name, "A");
        assert_eq!(form.amount, "12.");
    }
}
