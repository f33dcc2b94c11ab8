//! Reusable Dioxus RSX components for the remuneration pages.

mod accordion;
mod agency_type_selector;
mod category_selector;
mod chart_container;
mod chart_header;
mod error_display;
mod group_selector;
mod header;
mod index_legend;
mod loading_spinner;
mod multi_select;
mod notices;
mod paginated_table;
mod remuneration_legend;
mod share_modal;
mod year_navigator;
mod year_selector;

pub use accordion::Accordion;
pub use agency_type_selector::AgencyTypeSelector;
pub use category_selector::CategorySelector;
pub use chart_container::ChartContainer;
pub use chart_header::ChartHeader;
pub use error_display::ErrorDisplay;
pub use group_selector::GroupSelector;
pub use header::Header;
pub use index_legend::IndexChartLegend;
pub use loading_spinner::LoadingSpinner;
pub use multi_select::{MultiSelect, SelectOption};
pub use notices::{NoDataNotice, NotCollecting};
pub use paginated_table::PaginatedTable;
pub use remuneration_legend::RemunerationLegend;
pub use share_modal::ShareModal;
pub use year_navigator::YearNavigator;
pub use year_selector::YearSelector;
