/// Fixed table mapping each Zillow web-service operation to the qualified
/// tag its result payload lives under in the response document. Immutable
/// for the life of the process.
const API_LIST: &[(&str, &str)] = &[
    ("GetDeepSearchResults", "SearchResults:searchresults"),
    (
        "GetUpdatedPropertyDetails",
        "UpdatedPropertyDetails:updatedPropertyDetails",
    ),
    ("GetDemographics", "Demographics:demographics"),
    ("GetSearchResults", "SearchResults:searchresults"),
    ("GetZestimate", "Zestimate:zestimate"),
    ("GetChart", "Chart:chart"),
    ("GetComps", "Comps:comps"),
    ("GetDeepComps", "Comps:comps"),
    ("GetRegionChildren", "RegionChildren:regionchildren"),
    ("GetRegionChart", "RegionChart:regionchart"),
    ("GetRateSummary", "RateSummary:rateSummary"),
    ("GetMonthlyPayments", "MonthlyPayments:paymentsSummary"),
];

/// Result tag for a named operation, or `None` when the name is not in the
/// table.
pub fn result_tag(api_name: &str) -> Option<&'static str> {
    API_LIST
        .iter()
        .find(|(name, _)| *name == api_name)
        .map(|(_, tag)| *tag)
}
