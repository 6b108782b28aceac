//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> String {
    r##"# Arrival Configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.

# Overriding a site replaces it entirely: lng, lat, title and marker_color
# are required, image is optional.
[sites.parking_lot]
lng = -123.2487763774755
lat = 49.27106955540924
title = "Parking Lot"
marker_color = "blue"
image = "images/parking_lot.png"

[sites.entrance]
lng = -123.25042484166043
lat = 49.270382121434956
title = "Building Entrance"
marker_color = "green"
image = "images/building_entrance.png"

[map]
# style = "mapbox://styles/mapbox/light-v10"
# zoom = 16.0              # 0-22
# navigation_control = true
# driver_marker_color = "red"
# image_dir = "/path/to/images"

[sheet]
# collapsed = 25.0         # percent of viewport height
# expanded = 60.0
# snap_threshold = 42.5    # released heights above this expand
# snap_transition_ms = 0

[progress]
# threshold = 0.0001       # planar distance in degrees
# line_element = "progress-line"
#
# [[progress.steps]]
# id = "parking"
# target = "parking_lot"   # parking_lot, entrance
# step_element = "step-parking"
# marker_element = "marker-parking"
# line_percent = 50.0

[directions]
# base_url = "https://api.mapbox.com/directions/v5/mapbox"
# access_token = "pk...."  # or set MAPBOX_ACCESS_TOKEN
# drive_profile = "driving"   # driving, driving-traffic, walking, cycling
# walk_profile = "walking"
# timeout_secs = 30        # 1-300

[location]
# watch = false
# high_accuracy = false
# alert_on_error = false

[window]
# title = "Arrival"
# width = 430
# height = 860

[logging]
# level = "INFO"           # TRACE, DEBUG, INFO, WARNING, ERROR
"##
    .to_string()
}
