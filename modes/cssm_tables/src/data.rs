//! Raw keyword data.
//!
//! Plain `&'static` slices, in the order completion lists present them.
//! Lookup structures are built from these in [`crate::CssTables`].

/// Document-match functions accepted by `@document`.
pub const DOCUMENT_TYPES: &[&str] = &[
    "domain", "regexp", "url", "url-prefix",
];

/// Media types accepted in `@media` conditions.
pub const MEDIA_TYPES: &[&str] = &[
    "all", "aural", "braille", "handheld", "print", "projection", "screen", "tty",
    "tv", "embossed",
];

/// Media features accepted in `@media` conditions.
pub const MEDIA_FEATURES: &[&str] = &[
    "width", "min-width", "max-width", "height", "min-height", "max-height",
    "device-width", "min-device-width", "max-device-width", "device-height",
    "min-device-height", "max-device-height", "aspect-ratio", "min-aspect-ratio",
    "max-aspect-ratio", "device-aspect-ratio", "min-device-aspect-ratio",
    "max-device-aspect-ratio", "color", "min-color", "max-color", "color-index",
    "min-color-index", "max-color-index", "monochrome", "min-monochrome",
    "max-monochrome", "resolution", "min-resolution", "max-resolution", "scan", "grid",
    "orientation", "device-pixel-ratio", "min-device-pixel-ratio",
    "max-device-pixel-ratio", "pointer", "any-pointer", "hover", "any-hover",
];

/// Keyword values of media features.
pub const MEDIA_VALUE_KEYWORDS: &[&str] = &[
    "landscape", "portrait", "none", "coarse", "fine", "on-demand", "hover",
    "interlace", "progressive",
];

/// Vendor or legacy properties that are recognized but highlighted apart.
pub const NON_STANDARD_PROPERTY_KEYWORDS: &[&str] = &[
    "scrollbar-arrow-color", "scrollbar-base-color", "scrollbar-dark-shadow-color",
    "scrollbar-face-color", "scrollbar-highlight-color", "scrollbar-shadow-color",
    "scrollbar-3d-light-color", "scrollbar-track-color", "shape-inside",
    "searchfield-cancel-button", "searchfield-decoration",
    "searchfield-results-button", "searchfield-results-decoration", "zoom",
];

/// Descriptors valid inside `@font-face`.
pub const FONT_PROPERTIES: &[&str] = &[
    "font-family", "src", "unicode-range", "font-variant", "font-feature-settings",
    "font-stretch", "font-weight", "font-style",
];

/// Descriptors valid inside `@counter-style`.
pub const COUNTER_DESCRIPTORS: &[&str] = &[
    "additive-symbols", "fallback", "negative", "pad", "prefix", "range", "speak-as",
    "suffix", "symbols", "system",
];

/// Named colors.
pub const COLOR_KEYWORDS: &[&str] = &[
    "aliceblue", "antiquewhite", "aqua", "aquamarine", "azure", "beige", "bisque",
    "black", "blanchedalmond", "blue", "blueviolet", "brown", "burlywood", "cadetblue",
    "chartreuse", "chocolate", "coral", "cornflowerblue", "cornsilk", "crimson",
    "cyan", "darkblue", "darkcyan", "darkgoldenrod", "darkgray", "darkgreen",
    "darkkhaki", "darkmagenta", "darkolivegreen", "darkorange", "darkorchid",
    "darkred", "darksalmon", "darkseagreen", "darkslateblue", "darkslategray",
    "darkturquoise", "darkviolet", "deeppink", "deepskyblue", "dimgray", "dodgerblue",
    "firebrick", "floralwhite", "forestgreen", "fuchsia", "gainsboro", "ghostwhite",
    "gold", "goldenrod", "gray", "grey", "green", "greenyellow", "honeydew", "hotpink",
    "indianred", "indigo", "ivory", "khaki", "lavender", "lavenderblush", "lawngreen",
    "lemonchiffon", "lightblue", "lightcoral", "lightcyan", "lightgoldenrodyellow",
    "lightgray", "lightgreen", "lightpink", "lightsalmon", "lightseagreen",
    "lightskyblue", "lightslategray", "lightsteelblue", "lightyellow", "lime",
    "limegreen", "linen", "magenta", "maroon", "mediumaquamarine", "mediumblue",
    "mediumorchid", "mediumpurple", "mediumseagreen", "mediumslateblue",
    "mediumspringgreen", "mediumturquoise", "mediumvioletred", "midnightblue",
    "mintcream", "mistyrose", "moccasin", "navajowhite", "navy", "oldlace", "olive",
    "olivedrab", "orange", "orangered", "orchid", "palegoldenrod", "palegreen",
    "paleturquoise", "palevioletred", "papayawhip", "peachpuff", "peru", "pink",
    "plum", "powderblue", "purple", "rebeccapurple", "red", "rosybrown", "royalblue",
    "saddlebrown", "salmon", "sandybrown", "seagreen", "seashell", "sienna", "silver",
    "skyblue", "slateblue", "slategray", "snow", "springgreen", "steelblue", "tan",
    "teal", "thistle", "tomato", "turquoise", "violet", "wheat", "white", "whitesmoke",
    "yellow", "yellowgreen",
];

/// Property value grammars: property name to a comma-separated list of
/// keyword values. An empty grammar means "no keyword values". Items in
/// angle brackets name a shared placeholder from [`COMMON_CSS_VALUES`].
pub const CSS_PROPERTIES: &[(&str, &str)] = &[
    ("align-items", "flex-start,flex-end,center,baseline,stretch"),
    ("align-content", "flex-start,flex-end,center,space-between,space-around,stretch"),
    ("align-self", "auto,flex-start,flex-end,center,baseline,stretch"),
    ("alignment-adjust", "auto,baseline,before-edge,text-before-edge,middle,central,after-edge,text-after-edge,ideographic,alphabetic,hanging,mathematical"),
    ("alignment-baseline", "baseline,use-script,before-edge,text-before-edge,after-edge,text-after-edge,central,middle,ideographic,alphabetic,hanging,mathematical"),
    ("animation", ""),
    ("animation-delay", ""),
    ("animation-direction", "normal,alternate"),
    ("animation-duration", ""),
    ("animation-fill-mode", "none,forwards,backwards,both"),
    ("animation-iteration-count", "infinite"),
    ("animation-name", "none"),
    ("animation-play-state", "running,paused"),
    ("animation-timing-function", ""),
    ("appearance", "icon,window,desktop,workspace,document,tooltip,dialog,button,push-button,hyperlink,radio-button,checkbox,menu-item,tab,menu,menubar,pull-down-menu,pop-up-menu,list-menu,radio-group,checkbox-group,outline-tree,range,field,combo-box,signature,password,normal,none"),
    ("azimuth", ""),
    ("backface-visibility", "visible,hidden"),
    ("background", ""),
    ("background-attachment", "scroll,fixed,local"),
    ("background-clip", "<box>"),
    ("background-color", "<color>"),
    ("background-image", "none"),
    ("background-origin", "<box>"),
    ("background-position", "<bg-position>"),
    ("background-repeat", "repeat,space,round,no-repeat,repeat-x,repeat-y"),
    ("background-size", "auto,cover,contain"),
    ("baseline-shift", "baseline,sub,super"),
    ("behavior", ""),
    ("binding", ""),
    ("bleed", ""),
    ("bookmark-label", ""),
    ("bookmark-level", "none"),
    ("bookmark-state", "open,closed"),
    ("bookmark-target", "none"),
    ("border", ""),
    ("border-bottom", ""),
    ("border-bottom-color", "<color>"),
    ("border-bottom-left-radius", ""),
    ("border-bottom-right-radius", ""),
    ("border-bottom-style", "<border-style>"),
    ("border-bottom-width", "<border-width>"),
    ("border-collapse", "collapse,separate"),
    ("border-color", "<color>"),
    ("border-image", ""),
    ("border-image-outset", ""),
    ("border-image-repeat", "stretch,repeat,round"),
    ("border-image-slice", ""),
    ("border-image-source", "none"),
    ("border-image-width", "auto"),
    ("border-left", ""),
    ("border-left-color", "<color>"),
    ("border-left-style", "<border-style>"),
    ("border-left-width", "<border-width>"),
    ("border-radius", ""),
    ("border-right", ""),
    ("border-right-color", "<color>"),
    ("border-right-style", "<border-style>"),
    ("border-right-width", "<border-width>"),
    ("border-spacing", ""),
    ("border-style", "<border-style>"),
    ("border-top", ""),
    ("border-top-color", "<color>"),
    ("border-top-left-radius", ""),
    ("border-top-right-radius", ""),
    ("border-top-style", "<border-style>"),
    ("border-top-width", "<border-width>"),
    ("border-width", "<border-width>"),
    ("bottom", "<margin-width>"),
    ("box-decoration-break", "slice,clone"),
    ("box-shadow", ""),
    ("box-sizing", "content-box,border-box"),
    ("break-after", "auto,always,avoid,left,right,page,column,avoid-page,avoid-column"),
    ("break-before", "auto,always,avoid,left,right,page,column,avoid-page,avoid-column"),
    ("break-inside", "auto,avoid,avoid-page,avoid-column"),
    ("caption-side", "top,bottom"),
    ("clear", "none,right,left,both"),
    ("clip", ""),
    ("clip-path", ""),
    ("clip-rule", ""),
    ("color", "<color>"),
    ("color-interpolation", ""),
    ("color-interpolation-filters", ""),
    ("color-profile", ""),
    ("color-rendering", ""),
    ("column-count", "auto"),
    ("column-fill", "auto,balance"),
    ("column-gap", "normal"),
    ("column-rule", ""),
    ("column-rule-color", "<color>"),
    ("column-rule-style", "<border-style>"),
    ("column-rule-width", "<border-width>"),
    ("column-span", "none,all"),
    ("column-width", "auto"),
    ("columns", ""),
    ("content", ""),
    ("counter-increment", ""),
    ("counter-reset", ""),
    ("crop", "auto"),
    ("cue", "cue-after,cue-before"),
    ("cue-after", ""),
    ("cue-before", ""),
    ("cursor", "auto,default,none,context-menu,help,pointer,progress,wait,cell,crosshair,text,vertical-text,alias,copy,move,no-drop,not-allowed,e-resize,n-resize,ne-resize,nw-resize,s-resize,se-resize,sw-resize,w-resize,ew-resize,ns-resize,nesw-resize,nwse-resize,col-resize,row-resize,all-scroll,zoom-in,zoom-out,grab,grabbing"),
    ("direction", "ltr,rtl"),
    ("display", "inline,block,list-item,inline-block,table,inline-table,table-row-group,table-header-group,table-footer-group,table-row,table-column-group,table-column,table-cell,table-caption,grid,inline-grid,run-in,ruby,ruby-base,ruby-text,ruby-base-container,ruby-text-container,contents,none,-moz-box,-moz-inline-block,-moz-inline-box,-moz-inline-grid,-moz-inline-stack,-moz-inline-table,-moz-grid,-moz-grid-group,-moz-grid-line,-moz-groupbox,-moz-deck,-moz-popup,-moz-stack,-moz-marker,-webkit-box,-webkit-inline-box,-ms-flexbox,-ms-inline-flexbox,flex,-webkit-flex,inline-flex,-webkit-inline-flex"),
    ("dominant-baseline", ""),
    ("drop-initial-after-adjust", "central,middle,after-edge,text-after-edge,ideographic,alphabetic,mathematical"),
    ("drop-initial-after-align", "baseline,use-script,before-edge,text-before-edge,after-edge,text-after-edge,central,middle,ideographic,alphabetic,hanging,mathematical"),
    ("drop-initial-before-adjust", "before-edge,text-before-edge,central,middle,hanging,mathematical"),
    ("drop-initial-before-align", "caps-height,baseline,use-script,before-edge,text-before-edge,after-edge,text-after-edge,central,middle,ideographic,alphabetic,hanging,mathematical"),
    ("drop-initial-size", "auto,line"),
    ("drop-initial-value", ""),
    ("elevation", "below,level,above,higher,lower"),
    ("empty-cells", "show,hide"),
    ("enable-background", ""),
    ("fill", ""),
    ("fill-opacity", ""),
    ("fill-rule", ""),
    ("filter", ""),
    ("fit", "fill,hidden,meet,slice"),
    ("fit-position", ""),
    ("flex", ""),
    ("flex-basis", ""),
    ("flex-direction", "row,row-reverse,column,column-reverse"),
    ("flex-flow", ""),
    ("flex-grow", ""),
    ("flex-shrink", ""),
    ("flex-wrap", "nowrap,wrap,wrap-reverse"),
    ("float", "left,right,none"),
    ("float-offset", ""),
    ("flood-color", ""),
    ("flood-opacity", ""),
    ("font", ""),
    ("font-family", ""),
    ("font-feature-settings", "normal"),
    ("font-kerning", "auto,normal,none,unset"),
    ("font-size", ""),
    ("font-size-adjust", "none"),
    ("font-stretch", "normal,ultra-condensed,extra-condensed,condensed,semi-condensed,semi-expanded,expanded,extra-expanded,ultra-expanded"),
    ("font-style", "normal,italic,oblique"),
    ("font-variant", "normal,small-caps"),
    ("font-variant-caps", "normal,small-caps,all-small-caps,petite-caps,all-petite-caps,unicase,titling-caps"),
    ("font-variant-position", "normal,sub,super,unset"),
    ("font-weight", "normal,bold,bolder,lighter,100,200,300,400,500,600,700,800,900"),
    ("glyph-orientation-horizontal", ""),
    ("glyph-orientation-vertical", ""),
    ("grid", ""),
    ("grid-area", ""),
    ("grid-auto-columns", ""),
    ("grid-auto-flow", ""),
    ("grid-auto-position", ""),
    ("grid-auto-rows", ""),
    ("grid-cell-stacking", "columns,rows,layer"),
    ("grid-column", ""),
    ("grid-columns", ""),
    ("grid-column-align", "start,end,center,stretch"),
    ("grid-column-sizing", ""),
    ("grid-column-start", ""),
    ("grid-column-end", ""),
    ("grid-column-span", ""),
    ("grid-flow", "none,rows,columns"),
    ("grid-layer", ""),
    ("grid-row", ""),
    ("grid-rows", ""),
    ("grid-row-align", "start,end,center,stretch"),
    ("grid-row-start", ""),
    ("grid-row-end", ""),
    ("grid-row-span", ""),
    ("grid-row-sizing", ""),
    ("grid-template", ""),
    ("grid-template-areas", ""),
    ("grid-template-columns", ""),
    ("grid-template-rows", ""),
    ("hanging-punctuation", ""),
    ("height", ""),
    ("hyphenate-after", "auto"),
    ("hyphenate-before", "auto"),
    ("hyphenate-character", "auto"),
    ("hyphenate-lines", "no-limit"),
    ("hyphenate-resource", ""),
    ("hyphens", "none,manual,auto"),
    ("icon", ""),
    ("image-orientation", "angle,auto"),
    ("image-rendering", ""),
    ("image-resolution", ""),
    ("ime-mode", "auto,normal,active,inactive,disabled"),
    ("inline-box-align", "last"),
    ("justify-content", "flex-start,flex-end,center,space-between,space-around"),
    ("left", "<margin-width>"),
    ("letter-spacing", "normal"),
    ("lighting-color", ""),
    ("line-height", "normal"),
    ("line-break", "auto,loose,normal,strict"),
    ("line-stacking", ""),
    ("line-stacking-ruby", "exclude-ruby,include-ruby"),
    ("line-stacking-shift", "consider-shifts,disregard-shifts"),
    ("line-stacking-strategy", "inline-line-height,block-line-height,max-height,grid-height"),
    ("list-style", ""),
    ("list-style-image", "none"),
    ("list-style-position", "inside,outside"),
    ("list-style-type", "disc,circle,square,decimal,decimal-leading-zero,lower-roman,upper-roman,lower-greek,lower-latin,upper-latin,armenian,georgian,lower-alpha,upper-alpha,none"),
    ("margin", "<margin-width>"),
    ("margin-bottom", "<margin-width>"),
    ("margin-left", "<margin-width>"),
    ("margin-right", "<margin-width>"),
    ("margin-top", "<margin-width>"),
    ("mark", ""),
    ("mark-after", ""),
    ("mark-before", ""),
    ("marker", ""),
    ("marker-end", ""),
    ("marker-mid", ""),
    ("marker-start", ""),
    ("marks", ""),
    ("marquee-direction", ""),
    ("marquee-play-count", ""),
    ("marquee-speed", ""),
    ("marquee-style", ""),
    ("mask", ""),
    ("max-height", ""),
    ("max-width", ""),
    ("min-height", ""),
    ("min-width", ""),
    ("move-to", ""),
    ("nav-down", ""),
    ("nav-index", ""),
    ("nav-left", ""),
    ("nav-right", ""),
    ("nav-up", ""),
    ("object-fit", "fill,contain,cover,none,scale-down"),
    ("object-position", "<bg-position>"),
    ("opacity", ""),
    ("order", ""),
    ("orphans", ""),
    ("outline", ""),
    ("outline-color", ""),
    ("outline-offset", ""),
    ("outline-style", "<border-style>"),
    ("outline-width", "<border-width>"),
    ("overflow", "<overflow>"),
    ("overflow-style", ""),
    ("overflow-wrap", "normal,break-word"),
    ("overflow-x", "<overflow>"),
    ("overflow-y", "<overflow>"),
    ("padding", ""),
    ("padding-bottom", ""),
    ("padding-left", ""),
    ("padding-right", ""),
    ("padding-top", ""),
    ("page", ""),
    ("page-break-after", "auto,always,avoid,left,right"),
    ("page-break-before", "auto,always,avoid,left,right"),
    ("page-break-inside", "auto,avoid"),
    ("page-policy", ""),
    ("pause", ""),
    ("pause-after", ""),
    ("pause-before", ""),
    ("perspective", ""),
    ("perspective-origin", ""),
    ("phonemes", ""),
    ("pitch", ""),
    ("pitch-range", ""),
    ("play-during", ""),
    ("pointer-events", "auto,none,visiblePainted,visibleFill,visibleStroke,visible,painted,fill,stroke,all"),
    ("position", "static,relative,absolute,fixed"),
    ("presentation-level", ""),
    ("punctuation-trim", ""),
    ("quotes", ""),
    ("rendering-intent", ""),
    ("resize", ""),
    ("rest", ""),
    ("rest-after", ""),
    ("rest-before", ""),
    ("richness", ""),
    ("right", "<margin-width>"),
    ("rotation", ""),
    ("rotation-point", ""),
    ("ruby-align", ""),
    ("ruby-overhang", ""),
    ("ruby-position", ""),
    ("ruby-span", ""),
    ("shape-rendering", ""),
    ("stop-color", ""),
    ("stop-opacity", ""),
    ("stroke", ""),
    ("stroke-dasharray", ""),
    ("stroke-dashoffset", ""),
    ("stroke-linecap", ""),
    ("stroke-linejoin", ""),
    ("stroke-miterlimit", ""),
    ("stroke-opacity", ""),
    ("stroke-width", ""),
    ("size", ""),
    ("speak", "normal,none,spell-out"),
    ("speak-header", "once,always"),
    ("speak-numeral", "digits,continuous"),
    ("speak-punctuation", "code,none"),
    ("speech-rate", ""),
    ("src", ""),
    ("stress", ""),
    ("string-set", ""),
    ("table-layout", "auto,fixed"),
    ("tab-size", ""),
    ("target", ""),
    ("target-name", ""),
    ("target-new", ""),
    ("target-position", ""),
    ("text-align", "left,right,center,justify,match-parent,start,end"),
    ("text-align-last", ""),
    ("text-anchor", ""),
    ("text-decoration", "none,underline,overline,line-through"),
    ("text-emphasis", ""),
    ("text-height", ""),
    ("text-indent", ""),
    ("text-justify", "auto,none,inter-word,inter-ideograph,inter-cluster,distribute,kashida"),
    ("text-outline", ""),
    ("text-overflow", "clip,ellipsis"),
    ("text-rendering", "auto,optimizeSpeed,optimizeLegibility,geometricPrecision"),
    ("text-shadow", ""),
    ("text-transform", "capitalize,uppercase,lowercase,none"),
    ("text-wrap", "normal,none,avoid"),
    ("top", "<margin-width>"),
    ("touch-action", "auto,none,pan-x,pan-y"),
    ("transform", ""),
    ("transform-origin", ""),
    ("transform-style", ""),
    ("transition", ""),
    ("transition-delay", ""),
    ("transition-duration", ""),
    ("transition-property", ""),
    ("transition-timing-function", ""),
    ("unicode-bidi", "normal,embed,isolate,bidi-override,isolate-override,plaintext"),
    ("user-modify", "read-only,read-write,write-only"),
    ("user-select", "none,text,toggle,element,elements,all"),
    ("vertical-align", "auto,use-script,baseline,sub,super,top,text-top,central,middle,bottom,text-bottom"),
    ("visibility", "visible,hidden,collapse"),
    ("voice-balance", ""),
    ("voice-duration", ""),
    ("voice-family", ""),
    ("voice-pitch", ""),
    ("voice-pitch-range", ""),
    ("voice-rate", ""),
    ("voice-stress", ""),
    ("voice-volume", ""),
    ("volume", ""),
    ("white-space", "normal,pre,nowrap,pre-wrap,pre-line,-pre-wrap,-o-pre-wrap,-moz-pre-wrap,-hp-pre-wrap"),
    ("white-space-collapse", ""),
    ("widows", ""),
    ("width", ""),
    ("will-change", ""),
    ("word-break", "normal,keep-all,break-all"),
    ("word-spacing", "normal"),
    ("word-wrap", "normal,break-word"),
    ("writing-mode", "horizontal-tb,vertical-rl,vertical-lr,lr-tb,rl-tb,tb-rl,bt-rl,tb-lr,bt-lr,lr-bt,rl-bt,lr,rl,tb"),
    ("z-index", "auto"),
    ("anchor-point", ""),
    ("flow-from", ""),
    ("flow-into", ""),
    ("font-language-override", ""),
    ("font-synthesis", ""),
    ("font-variant-alternates", ""),
    ("font-variant-east-asian", ""),
    ("font-variant-ligatures", ""),
    ("font-variant-numeric", ""),
    ("marker-offset", ""),
    ("marquee-loop", ""),
    ("region-break-after", ""),
    ("region-break-before", ""),
    ("region-break-inside", ""),
    ("region-fragment", ""),
    ("shape-image-threshold", ""),
    ("shape-inside", ""),
    ("shape-margin", ""),
    ("shape-outside", ""),
    ("speak-as", ""),
    ("text-decoration-color", ""),
    ("text-decoration-line", ""),
    ("text-decoration-skip", ""),
    ("text-decoration-style", ""),
    ("text-emphasis-color", ""),
    ("text-emphasis-position", ""),
    ("text-emphasis-style", ""),
    ("text-size-adjust", ""),
    ("text-space-collapse", ""),
    ("text-underline-position", ""),
    ("voice-range", ""),
];

/// Shared placeholder expansions referenced from [`CSS_PROPERTIES`] grammars.
pub const COMMON_CSS_VALUES: &[(&str, &[&str])] = &[
    ("<box>", &["padding-box", "border-box", "content-box"]),
    ("<color>", COLOR_KEYWORDS),
    ("<border-width>", &["thin", "medium", "thick"]),
    (
        "<border-style>",
        &[
            "none", "hidden", "dotted", "dashed", "solid", "double", "groove", "ridge", "inset",
            "outset",
        ],
    ),
    ("<margin-width>", &["auto"]),
    ("<bg-position>", &["left", "right", "top", "bottom", "center"]),
    ("<overflow>", &["visible", "hidden", "scroll", "auto"]),
];

/// Placeholder whose expansion is left out of the flat value keyword set.
pub const COLOR_PLACEHOLDER: &str = "<color>";
