/// How a field's raw input is coerced when the payload is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Decimal input, coerced to `f64`.
    Float,
    /// Whole-number input, coerced to `i64`.
    Integer,
    /// Checkbox input, coerced to `bool`.
    Boolean,
}

/// Static metadata for one collected financial indicator.
///
/// The `name` is both the display label and the key under which raw input is
/// stored in [`crate::FormState`]. Unit, step and placeholder are rendering
/// hints only.
#[derive(Debug, Clone)]
pub struct FieldDescriptor {
    pub name: &'static str,
    pub kind: FieldKind,
    pub unit: Option<&'static str>,
    pub step: Option<&'static str>,
    pub placeholder: Option<&'static str>,
}

const FIELDS: [FieldDescriptor; 10] = [
    FieldDescriptor {
        name: "Average Monthly Balance",
        kind: FieldKind::Float,
        unit: Some("₹"),
        step: Some("0.01"),
        placeholder: Some("e.g., 39655.51"),
    },
    FieldDescriptor {
        name: "Number of Transactions",
        kind: FieldKind::Integer,
        unit: None,
        step: None,
        placeholder: Some("e.g., 194"),
    },
    FieldDescriptor {
        name: "Number of GST-paid Transactions",
        kind: FieldKind::Integer,
        unit: None,
        step: None,
        placeholder: Some("e.g., 120"),
    },
    FieldDescriptor {
        name: "Debt to Capital",
        kind: FieldKind::Float,
        unit: None,
        step: Some("0.01"),
        placeholder: Some("e.g., 0.21"),
    },
    FieldDescriptor {
        name: "Operating Profit Margins",
        kind: FieldKind::Float,
        unit: Some("%"),
        step: Some("0.01"),
        placeholder: Some("e.g., 0.04"),
    },
    FieldDescriptor {
        name: "Use of Overdraft",
        kind: FieldKind::Boolean,
        unit: None,
        step: None,
        placeholder: None,
    },
    FieldDescriptor {
        name: "Net Working Capital Days",
        kind: FieldKind::Integer,
        unit: None,
        step: None,
        placeholder: Some("e.g., 80"),
    },
    FieldDescriptor {
        name: "Year on Year Sales Growth",
        kind: FieldKind::Float,
        unit: Some("%"),
        step: Some("0.01"),
        placeholder: Some("e.g., 0.18"),
    },
    FieldDescriptor {
        name: "EMI Missed Count",
        kind: FieldKind::Integer,
        unit: None,
        step: None,
        placeholder: Some("e.g., 0"),
    },
    FieldDescriptor {
        name: "Utility Bill Default on Payment Date",
        kind: FieldKind::Boolean,
        unit: None,
        step: None,
        placeholder: None,
    },
];

/// The ordered descriptor list. Order is presentation order; payload
/// construction looks fields up by name, never by position.
pub fn fields() -> &'static [FieldDescriptor] {
    &FIELDS
}

/// Look up a descriptor by its display name.
pub fn descriptor(name: &str) -> Option<&'static FieldDescriptor> {
    FIELDS.iter().find(|field| field.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn schema_has_ten_uniquely_named_fields() {
        assert_eq!(fields().len(), 10);
        for (i, field) in fields().iter().enumerate() {
            assert!(
                fields()[..i].iter().all(|other| other.name != field.name),
                "duplicate field name: {}",
                field.name
            );
        }
    }

    #[test]
    fn descriptor_lookup_is_keyed_by_display_name() {
        let field = descriptor("Use of Overdraft").unwrap();
        assert_eq!(field.kind, FieldKind::Boolean);
        assert!(descriptor("use_of_overdraft").is_none());
    }

    #[test]
    fn numeric_fields_carry_their_rendering_hints() {
        let balance = descriptor("Average Monthly Balance").unwrap();
        assert_eq!(balance.kind, FieldKind::Float);
        assert_eq!(balance.unit, Some("₹"));
        assert_eq!(balance.step, Some("0.01"));

        let transactions = descriptor("Number of Transactions").unwrap();
        assert_eq!(transactions.kind, FieldKind::Integer);
        assert_eq!(transactions.step, None);
    }
}
