//! Shared document fixtures for the integration suites.

use serde_json::{json, Value};

/// A small satellite-tracking scenario touching most property kinds.
pub fn satellite_scenario() -> Value {
    json!([
        {
            "id": "document",
            "name": "satellite pass",
            "version": "1.0",
            "clock": {
                "interval": "2012-08-04T16:00:00Z/2012-08-04T18:00:00Z",
                "currentTime": "2012-08-04T16:00:00Z",
                "multiplier": 60.0,
                "range": "LOOP_STOP",
                "step": "SYSTEM_CLOCK_MULTIPLIER"
            }
        },
        {
            "id": "sat-1",
            "name": "Satellite 1",
            "availability": "2012-08-04T16:00:00Z/2012-08-04T18:00:00Z",
            "position": {
                "epoch": "2012-08-04T16:00:00Z",
                "cartesian": [
                    0.0, 6524834.0, 0.0, 0.0,
                    60.0, 6524834.0, 100000.0, 0.0,
                    120.0, 6524834.0, 200000.0, 0.0
                ],
                "interpolationAlgorithm": "LAGRANGE",
                "interpolationDegree": 5
            },
            "orientation": {
                "unitQuaternion": [0.0, 0.0, 0.0, 1.0]
            },
            "billboard": {
                "image": "http://example.com/sat.png",
                "scale": 1.5,
                "show": true
            },
            "label": {
                "text": "Satellite 1",
                "font": "11pt Lucida Console",
                "fillColor": {"rgba": [0, 255, 0, 255]},
                "horizontalOrigin": "LEFT",
                "pixelOffset": [12.0, 0.0]
            },
            "path": {
                "show": true,
                "width": 1.0,
                "color": {"rgba": [255, 255, 0, 128]}
            },
            "agi_conicSensor": {
                "show": true,
                "outerHalfAngle": 0.5,
                "radius": 1000000.0,
                "intersectionColor": {"rgba": [255, 255, 0, 255]}
            },
            "properties": {
                "constellation": "demo",
                "norad": 25544,
                "payloads": [{"interval": "2012-08-04T16:00:00Z/2012-08-04T18:00:00Z", "value": "camera"}]
            }
        },
        {
            "id": "ground-station",
            "name": "Ground station",
            "position": {"cartographicDegrees": [-75.6, 40.0, 0.0]},
            "point": {
                "color": {"rgba": [255, 0, 0, 255]},
                "pixelSize": 8.0
            },
            "agi_vector": {
                "show": true,
                "direction": {"unitCartesian": [0.0, 0.0, 1.0]},
                "length": 10.0
            }
        }
    ])
}
