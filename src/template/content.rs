//! Boilerplate content for the built-in templates
//!
//! Pure functions from (project, author, date) to file payloads. Nothing in
//! here touches the filesystem.

pub fn script_main_py(script_name: &str, author: &str, date: &str) -> String {
    format!(
        "# {script_name} - Description\n\
         #\n\
         # Author: {author}\n\
         # Created on: {date}\n\
         #\n"
    )
}

pub fn main_py(project: &str, author: &str, date: &str, package: &str) -> String {
    format!(
        "# {project} - Description\n\
         #\n\
         # Author: {author}\n\
         # Created on: {date}\n\
         #\n\n\
         from {package} import *\n\n\
         def main():\n    \
             print(\"Hello World!\")\n\n\n\
         if __name__ == '__main__':\n    \
             main()\n"
    )
}

pub fn pyproj_init_py(project: &str) -> String {
    format!(
        "# {project}/__init__.py\n\n\
         # Import statements\n\
         from .model import *\n\n\
         # Package-level variables\n\
         version = \"1.0\"\n"
    )
}

pub fn model_py(project: &str, author: &str, date: &str) -> String {
    format!(
        "# {project}/model.py\n\
         #\n\
         # Author: {author}\n\
         # Created on: {date}\n\
         #\n"
    )
}

pub const REQUIREMENTS: &str = "\
# Write down the modules you need to install and then
# run the cmd: ```pip install -r requirements.txt```
";

pub const README_MD: &str = "# Write your Markdown here";

pub fn run_py(project: &str, author: &str, date: &str) -> String {
    format!(
        "# {project}\n\
         #\n\
         # Author: {author}\n\
         # Created on: {date}\n\
         #\n\n\
         \"\"\"\n\
         This script starts the Flask development server to run the web application.\n\n\
         Usage:\n    \
             >>> python3 run.py\n\
         \"\"\"\n\n\
         from app import app\n\n\
         if __name__ == '__main__':\n    \
             app.run(host='0.0.0.0', port=5000)\n"
    )
}

pub fn routes_py(project: &str, author: &str, date: &str) -> String {
    format!(
        "\"\"\"\n\
         {project}\n\n\
         This module defines the routes and views for the Flask web application.\n\n\
         Author: {author}\n\
         Created on: {date}\n\
         \"\"\"\n\n\
         from app import app\n\
         from flask import render_template\n\n\
         import logging\n\n\
         logger = logging.getLogger(__name__)\n\n\n\
         @app.route('/')\n\
         def index():\n    \
             logger.info(\"Visited homepage.\")\n    \
             return render_template(\"index.html\")\n"
    )
}

pub const FLASK_INIT: &str = r#""""
Flask Web App Initialization

This module initializes the Flask web application instance, configures it, and imports the routes.

Attributes:
    app (Flask): The Flask web application instance.
"""
from flask import Flask

app = Flask(__name__)

# Import routes
from app import routes
"#;

pub const FLASK_INDEX_HTML: &str = "\
<!DOCTYPE html>
<html lang=\"en\">
<head>
    <meta charset=\"UTF-8\">
    <title>Home</title>
    <link rel=\"stylesheet\" href=\"{{ url_for('static', filename='css/style.css') }}\">
</head>
<body>
    <h1>Welcome to my Homepage!</h1>
</body>
</html>
";

pub const FLASK_STYLE_CSS: &str = "\
/* static/css/style.css */

* {
    margin: 0;
    padding: 0;
    box-sizing: border-box;
    text-decoration: none;
}
";

pub const FLASK_REQUIREMENTS: &str = "\
# Write down the modules you need to install and then
# run the cmd: ```pip install -r requirements.txt```
Flask
gunicorn
python-dotenv
";

pub fn flask_config_py(author: &str, date: &str) -> String {
    format!(
        "\"\"\"\n\
         config.py\n\n\
         Author: {author}\n\
         Created on: {date}\n\
         \"\"\"\n"
    )
}

pub fn mit_license(author: &str, year: i32) -> String {
    format!(
        "MIT License\n\n\
         Copyright (c) {year} {author}\n\n\
         Permission is hereby granted, free of charge, to any person obtaining a copy\n\
         of this software and associated documentation files (the \"Software\"), to deal\n\
         in the Software without restriction, including without limitation the rights\n\
         to use, copy, modify, merge, publish, distribute, sublicense, and/or sell\n\
         copies of the Software, and to permit persons to whom the Software is\n\
         furnished to do so, subject to the following conditions:\n\n\
         The above copyright notice and this permission notice shall be included in all\n\
         copies or substantial portions of the Software.\n\n\
         THE SOFTWARE IS PROVIDED \"AS IS\", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR\n\
         IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,\n\
         FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE\n\
         AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER\n\
         LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,\n\
         OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE\n\
         SOFTWARE.\n"
    )
}

pub const PY_GITIGNORE: &str = "\
### Python ###
# Byte-compiled / optimized / DLL files
__pycache__/
*.py[cod]
*$py.class

# C extensions
*.so

# Distribution / packaging
.Python
build/
develop-eggs/
dist/
downloads/
eggs/
.eggs/
lib/
lib64/
parts/
sdist/
var/
wheels/
*.egg-info/
.installed.cfg
*.egg

# Environments
.env
.venv
env/
venv/
ENV/

# Unit test / coverage reports
htmlcov/
.tox/
.coverage
.pytest_cache/

# Jupyter Notebook
.ipynb_checkpoints
";
