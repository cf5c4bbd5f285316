//! Inline styles of the metadata definition table.

pub const FLEX_TABLE: &str = "display: flex; flex-flow: row wrap; border-left: 1px solid #ddd;";

/// One cell; seven per row.
pub const FLEX_ROW: &str = "text-align: left; width: calc(100% / 7); box-sizing: border-box; \
     padding: 8px 16px; background-color: #fff; border-right: solid 1px #ddd; \
     border-bottom: solid 1px #ddd; font-size: 0.875rem;";

pub const FLEX_ROW_HEADER: &str = "text-align: center; width: calc(100% / 7); box-sizing: border-box; \
     padding: 8px 16px; background-color: #f5f5f5; border-right: solid 1px #ddd; \
     border-bottom: solid 1px #ddd; border-top: solid 1px #ddd; font-size: 0.875rem; font-weight: 500;";

pub const FORM_CONTROL: &str = "width: 100%; box-sizing: border-box; font-size: 0.875rem;";

pub const HELP_TEXT: &str = "display: block; color: #d32f2f; font-size: 0.75rem; margin-top: 2px;";

pub const BOTTOM_GUTTER: &str = "margin-bottom: 32px;";
