use crate::compiler::ast::{Statement, Verb};
use crate::interpreter::analyzer::Analyzer;

impl Analyzer {
    /// Validate every clause of a classified command, returning all error text
    pub fn analyze_statement(&mut self, statement: &Statement) -> String {
        let mut errors = String::new();

        if matches!(statement.verb, Verb::Show | Verb::Alter | Verb::Source) {
            return errors;
        }

        if statement.has_table() && !self.is_table(self.primary()) {
            errors.push_str(&format!("Table '{}' not defined on server. ", self.primary()));
        }

        if matches!(statement.verb, Verb::Select | Verb::Delete) {
            errors.push_str(&self.parse_join(&statement.join));
        }

        let operands = match statement.verb {
            Verb::Delete => &statement.modifier,
            _ => &statement.operands,
        };

        let clauses = [
            Some(&statement.join),
            Some(operands),
            statement.where_clause.as_ref(),
            statement.group_by.as_ref(),
            statement.having.as_ref(),
            statement.order_by.as_ref(),
        ];

        for clause in clauses.into_iter().flatten() {
            if !clause.is_empty() {
                errors.push_str(&self.validate_field_names(clause));
            }
        }
        errors
    }
}
