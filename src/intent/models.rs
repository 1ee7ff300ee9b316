use std::fmt;

/// A structured list operation recognized in free chat text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    ShowList,
    ClearList,
    ShowCategories,
    ChangeCategory,
    DeleteCategory,
    AddCategorized { item: String, category: String },
    Add { item: String, quantity: u32 },
    Remove { item: String, quantity: u32 },
}

impl Intent {
    pub fn mutates_list(&self) -> bool {
        matches!(
            self,
            Intent::ClearList
                | Intent::AddCategorized { .. }
                | Intent::Add { .. }
                | Intent::Remove { .. }
        )
    }
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Intent::ShowList => write!(f, "show-list"),
            Intent::ClearList => write!(f, "clear-list"),
            Intent::ShowCategories => write!(f, "show-categories"),
            Intent::ChangeCategory => write!(f, "change-category"),
            Intent::DeleteCategory => write!(f, "delete-category"),
            Intent::AddCategorized { item, category } => {
                write!(f, "add '{item}' in '{category}'")
            }
            Intent::Add { item, quantity } => write!(f, "add {quantity} x '{item}'"),
            Intent::Remove { item, quantity } => write!(f, "remove {quantity} x '{item}'"),
        }
    }
}
