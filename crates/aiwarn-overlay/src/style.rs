/// Marker class the presenter puts on the page body while the overlay is
/// open; the injected stylesheet pauses CSS animations on anything carrying
/// it. Removing the stylesheet on dismissal is what unfreezes them.
pub const ACTIVE_CLASS: &str = "aiwarning_active";

/// Class of the full-viewport backdrop container. Its presence in the page
/// is the singleton check.
pub const CONTAINER_CLASS: &str = "aiwarning_container";

pub const POPUP_CLASS: &str = "aiwarning_popup";
pub const CLOSE_CLASS: &str = "aiwarning_close";
pub const CLOSE_CORNER_CLASS: &str = "aiwarning_close_corner";
pub const BOTTOM_ROW_CLASS: &str = "aiwarning_bottomrow";
pub const WATERMARK_CLASS: &str = "aiwarning_watermark";

/// The overlay's entire presentation, injected as one style block on open
/// and removed as a unit on dismissal.
pub const OVERLAY_CSS: &str = "
.aiwarning_active {
	-webkit-animation-play-state: paused !important;
	-moz-animation-play-state: paused !important;
	-o-animation-play-state: paused !important;
	animation-play-state: paused !important;
}
.aiwarning_container {
	position: fixed;
	inset: 0px;
	backdrop-filter: blur(25px);
	background-color: rgba(0, 0, 0, 0.6);
	z-index: 2000;
	display: flex;
	justify-content: center;
	align-items: center;
	transition: opacity 150ms;
	animation: none;
}
.aiwarning_popup {
	color: #CACACA;
	background-color: #1B1B1B;
	padding: 30px 40px;
	border-radius: 5px;
	box-shadow: 0px 0px 10px #000000;
	position: relative;
	font-family: Lato, sans-serif;
	max-width: 900px;
	box-sizing: border-box;
	border-top: 1px solid #FF2449;
}
.aiwarning_popup h2 {
	margin: 0 15px 0 0;
	font-size: 22px;
}
.aiwarning_popup p {
	font-size: 16px;
}
.aiwarning_bottomrow {
	display: flex;
	justify-content: right;
}
.aiwarning_close_corner {
	position: absolute;
	top: 10px;
	right: 10px;
	width: 18px;
	height: 18px;
	fill: none;
	stroke: #CACACA;
	stroke-width: 2px;
	stroke-linecap: round;
	cursor: pointer;
}
.aiwarning_close_corner:hover {
	stroke: white;
}
.aiwarning_watermark {
	position: absolute;
	left: 10px;
	bottom: 10px;
	color: white;
	opacity: 0.25;
	text-decoration: none;
	font-size: 12px;
}
.aiwarning_watermark:hover {
	opacity: 0.6;
	color: #FF2449;
}
";
